//! Frontend configuration module
//!
//! Compile-time overrides for the URLs the web client talks to.

use shared::config::{ClientConfig, DEFAULT_GRAPHQL_ENDPOINT};

/// Frontend configuration for URLs and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Client core settings (GraphQL endpoint, page size, storage key)
    pub client: ClientConfig,
    /// Documentation URL
    pub documentation_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let client = ClientConfig::default().with_graphql_endpoint(
            option_env!("MOODLENET_GRAPHQL_ENDPOINT").unwrap_or(DEFAULT_GRAPHQL_ENDPOINT),
        );
        Self {
            client,
            documentation_url: option_env!("MOODLENET_DOCUMENTATION_URL")
                .unwrap_or("https://docs.moodle.org/dev/MoodleNet")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute GraphQL URL, resolved against the page origin when relative.
    pub fn graphql_url(&self) -> String {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        resolve_endpoint(&self.client.graphql_endpoint, origin.as_deref())
    }
}

/// Make `endpoint` absolute. The HTTP client rejects relative URLs.
pub fn resolve_endpoint(endpoint: &str, origin: Option<&str>) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ),
        None => endpoint.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config_is_valid() {
        let config = FrontendConfig::default();
        assert!(config.client.validate().is_ok());
        assert_eq!(config.client.page_size, 15);
        assert!(config.documentation_url.starts_with("http"));
    }

    #[test]
    fn test_resolve_relative_endpoint() {
        assert_eq!(
            resolve_endpoint("/api/graphql", Some("https://moodle.net/")),
            "https://moodle.net/api/graphql"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_endpoint() {
        assert_eq!(
            resolve_endpoint("http://localhost:4000/api/graphql", Some("https://moodle.net")),
            "http://localhost:4000/api/graphql"
        );
    }

    #[test]
    fn test_resolve_without_origin() {
        assert_eq!(resolve_endpoint("/api/graphql", None), "/api/graphql");
    }
}
