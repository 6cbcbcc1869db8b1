//! # Configuration
//!
//! Settings the client core needs to talk to a MoodleNet instance.

use thiserror::Error;

/// Default GraphQL endpoint, relative to the page origin.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/api/graphql";

/// Number of items requested per page of a listing.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Largest page the backend will serve.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Storage key of the serialized [`crate::models::UserSession`].
pub const DEFAULT_SESSION_KEY: &str = "moodlenet.session.v1";

/// Storage key the raw access token has always been written under.
pub const LEGACY_TOKEN_KEY: &str = "user_access_token";

/// Invalid configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GraphQL endpoint must not be empty")]
    EmptyEndpoint,

    #[error("Page size {0} is outside 1..={max}", max = MAX_PAGE_SIZE)]
    PageSizeOutOfRange(u32),

    #[error("Session storage key must not be empty")]
    EmptySessionKey,
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL the GraphQL requests are posted to.
    pub graphql_endpoint: String,
    /// Items per page for listings.
    pub page_size: u32,
    /// Storage key of the session record.
    pub session_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_graphql_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.graphql_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    /// Check the values before the client is built from them.
    ///
    /// # Errors
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.graphql_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::PageSizeOutOfRange(self.page_size));
        }
        if self.session_key.trim().is_empty() {
            return Err(ConfigError::EmptySessionKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert_eq!(config.graphql_endpoint, "/api/graphql");
        assert_eq!(config.page_size, 15);
        assert_eq!(config.session_key, "moodlenet.session.v1");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_graphql_endpoint("https://moodle.net/api/graphql")
            .with_page_size(30)
            .with_session_key("custom");
        assert_eq!(config.graphql_endpoint, "https://moodle.net/api/graphql");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.session_key, "custom");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            ClientConfig::new().with_graphql_endpoint("  ").validate(),
            Err(ConfigError::EmptyEndpoint)
        );
        assert_eq!(
            ClientConfig::new().with_page_size(0).validate(),
            Err(ConfigError::PageSizeOutOfRange(0))
        );
        assert_eq!(
            ClientConfig::new().with_page_size(101).validate(),
            Err(ConfigError::PageSizeOutOfRange(101))
        );
        assert_eq!(
            ClientConfig::new().with_session_key("").validate(),
            Err(ConfigError::EmptySessionKey)
        );
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::PageSizeOutOfRange(0).to_string(),
            "Page size 0 is outside 1..=100"
        );
    }
}
