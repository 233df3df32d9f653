//! User service
//!
//! Stateless facade over a user store and a notifier. Handles lookup,
//! creation with a welcome message, and deactivation.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::domain::entities::{User, UserId};
use crate::domain::ports::{Notifier, UserStore};
use crate::error::ServiceError;

/// Subject line of the message sent to newly created users
pub const WELCOME_SUBJECT: &str = "Welcome!";

/// Body of the message sent to newly created users
pub fn welcome_body(name: &str) -> String {
    format!("Hello {}, welcome to our platform!", name)
}

/// Service for managing users
pub struct UserService<US, N>
where
    US: UserStore,
    N: Notifier,
{
    users: Arc<US>,
    notifier: Arc<N>,
    config: ServiceConfig,
}

impl<US, N> UserService<US, N>
where
    US: UserStore,
    N: Notifier,
{
    pub fn new(users: Arc<US>, notifier: Arc<N>) -> Self {
        Self::with_config(users, notifier, ServiceConfig::default())
    }

    pub fn with_config(users: Arc<US>, notifier: Arc<N>, config: ServiceConfig) -> Self {
        Self {
            users,
            notifier,
            config,
        }
    }

    /// Find a user by ID
    pub fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        Ok(self.users.get_by_id(id)?)
    }

    /// Active users in store order
    ///
    /// The store is enumerated on every call; filtering happens as the
    /// returned iterator is consumed.
    pub fn get_active_users(&self) -> Result<impl Iterator<Item = User>, ServiceError> {
        let users = self.users.get_all()?;
        Ok(users.into_iter().filter(|u| u.is_active))
    }

    /// Create a user and send the welcome message
    ///
    /// Returns `false` without side effects if the ID is already taken.
    /// The existence check and the insert are separate store calls, so two
    /// concurrent callers may both pass the check.
    pub fn create_user(&self, user: &User) -> Result<bool, ServiceError> {
        if !self.insert_new(user)? {
            return Ok(false);
        }

        let delivered = self
            .notifier
            .send(&user.email, WELCOME_SUBJECT, &welcome_body(&user.name))?;
        log_welcome(user, delivered);

        Ok(true)
    }

    /// Same as [`create_user`](Self::create_user), awaiting the welcome message
    pub async fn create_user_async(&self, user: &User) -> Result<bool, ServiceError> {
        if !self.insert_new(user)? {
            return Ok(false);
        }

        let delivered = self
            .notifier
            .send_async(&user.email, WELCOME_SUBJECT, &welcome_body(&user.name))
            .await?;
        log_welcome(user, delivered);

        Ok(true)
    }

    /// Mark a user inactive and write it back
    ///
    /// Returns `false` if no such user exists.
    pub fn deactivate_user(&self, id: UserId) -> Result<bool, ServiceError> {
        let Some(mut user) = self.users.get_by_id(id)? else {
            tracing::debug!("Cannot deactivate user {}: not found", id);
            return Ok(false);
        };

        user.deactivate();
        self.users.update(&user)?;
        tracing::info!("Deactivated user {}", id);

        Ok(true)
    }

    /// Find a user by ID, failing with `UserNotFound` when absent
    pub fn get_user_or_fail(&self, id: UserId) -> Result<User, ServiceError> {
        self.users
            .get_by_id(id)?
            .ok_or(ServiceError::UserNotFound(id))
    }

    /// Poll the store for a user up to `max_retries` times
    ///
    /// Returns the attempt on which the user was first found, or
    /// `max_retries` if it never was. Attempts are back to back. A store
    /// error ends the poll.
    pub fn get_user_retry_count(&self, id: UserId, max_retries: u32) -> Result<u32, ServiceError> {
        let mut attempts = 0;
        while attempts < max_retries {
            attempts += 1;
            if self.users.get_by_id(id)?.is_some() {
                tracing::debug!("Found user {} on attempt {}", id, attempts);
                return Ok(attempts);
            }
        }

        tracing::debug!("User {} not found after {} attempts", id, max_retries);
        Ok(max_retries)
    }

    /// [`get_user_retry_count`](Self::get_user_retry_count) with the configured bound
    pub fn get_user_retry_count_default(&self, id: UserId) -> Result<u32, ServiceError> {
        self.get_user_retry_count(id, self.config.max_lookup_retries)
    }

    fn insert_new(&self, user: &User) -> Result<bool, ServiceError> {
        if self.users.exists(user.id)? {
            tracing::debug!("User {} already exists, skipping create", user.id);
            return Ok(false);
        }

        self.users.add(user)?;
        Ok(true)
    }
}

fn log_welcome(user: &User, delivered: bool) {
    if delivered {
        tracing::info!("Created user {} and sent welcome to {}", user.id, user.email);
    } else {
        tracing::warn!(
            "Created user {} but welcome to {} was not accepted",
            user.id,
            user.email
        );
    }
}
