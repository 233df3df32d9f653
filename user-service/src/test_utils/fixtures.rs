//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::User;

/// Create an active test user with default values
pub fn test_user() -> User {
    User::new(1, "Alice", "alice@example.com")
}

/// Create an active test user with a specific id
pub fn test_user_with_id(id: i32) -> User {
    User::new(id, format!("User {}", id), format!("user{}@example.com", id))
}

/// Create a deactivated test user with a specific id
pub fn inactive_user(id: i32) -> User {
    User {
        is_active: false,
        ..test_user_with_id(id)
    }
}
