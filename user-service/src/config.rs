use std::env;

/// Default bound for `get_user_retry_count_default`
pub const DEFAULT_MAX_LOOKUP_RETRIES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Attempt cap used when the caller does not pass one
    pub max_lookup_retries: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_lookup_retries: DEFAULT_MAX_LOOKUP_RETRIES,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_lookup_retries = match lookup("USER_SERVICE_MAX_LOOKUP_RETRIES") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid USER_SERVICE_MAX_LOOKUP_RETRIES={:?}, using {}",
                    raw,
                    DEFAULT_MAX_LOOKUP_RETRIES
                );
                DEFAULT_MAX_LOOKUP_RETRIES
            }),
            None => DEFAULT_MAX_LOOKUP_RETRIES,
        };

        Self { max_lookup_retries }
    }
}
