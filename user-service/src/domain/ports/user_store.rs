//! User store port
//!
//! Abstraction over durable user persistence. Implementations are provided
//! by the embedding application (database clients, caches, ...).

use crate::domain::entities::{User, UserId};
use crate::error::StoreError;

/// Repository for User entities
///
/// Use `MockUserStore` in tests to stub and verify calls.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Find a user by ID
    fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// All stored users, in the store's enumeration order
    fn get_all(&self) -> Result<Vec<User>, StoreError>;

    /// Check whether a user with this ID is stored
    fn exists(&self, id: UserId) -> Result<bool, StoreError>;

    /// Insert a new user
    fn add(&self, user: &User) -> Result<(), StoreError>;

    /// Write back an existing user
    fn update(&self, user: &User) -> Result<(), StoreError>;
}
