//! User Service
//!
//! A small user-management facade over two injected collaborators: a user
//! store and a notifier. Uses hexagonal (ports & adapters) architecture so
//! either collaborator can be swapped for a test double.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;


pub use app::{UserService, WELCOME_SUBJECT};
pub use config::ServiceConfig;
pub use domain::entities::{User, UserId};
pub use domain::ports::{Notifier, UserStore};
pub use error::{NotifierError, ServiceError, StoreError};
