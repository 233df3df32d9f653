//! Error types for the user service
//!
//! This module defines error types for each layer:
//! - `StoreError`: User store failures (connectivity, database)
//! - `NotifierError`: Notification transport failures
//! - `ServiceError`: Service layer errors (wraps collaborator errors as-is)

use thiserror::Error;

use crate::domain::entities::UserId;

/// User store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// Notification transport errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifierError {
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Recipient {to} rejected: {reason}")]
    Rejected { to: String, reason: String },
}

/// Service layer errors
///
/// Collaborator failures are carried unchanged in `Store` and `Notifier`.
/// `UserNotFound` is the only error the service raises itself.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Notification error: {0}")]
    Notifier(#[from] NotifierError),

    #[error("User with ID {0} not found")]
    UserNotFound(UserId),
}
