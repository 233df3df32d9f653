//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod user_store;

pub use notifier::Notifier;
pub use user_store::UserStore;

#[cfg(test)]
pub use notifier::MockNotifier;
#[cfg(test)]
pub use user_store::MockUserStore;
