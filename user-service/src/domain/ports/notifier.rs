//! Notifier port
//!
//! Abstraction over outbound email delivery.

use async_trait::async_trait;

use crate::error::NotifierError;

/// Outbound message sender
///
/// Both methods report whether the transport accepted the message. A
/// transport failure is an `Err`, not `Ok(false)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a message, blocking until the transport answers
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<bool, NotifierError>;

    /// Send a message, suspending the caller until the transport answers
    async fn send_async(&self, to: &str, subject: &str, body: &str)
        -> Result<bool, NotifierError>;
}
