//! Directory Client Configuration
//!
//! Credentials and endpoints for the token grant and the person directory.
//! Values can be set explicitly or picked up from the environment; explicit
//! values win over environment variables, and endpoint defaults apply last.

use std::time::Duration;

use crate::error::{DirectoryError, Result};

pub const DEFAULT_AUTH_ENDPOINT: &str = "https://auth.mozilla.auth0.com/oauth/token";
pub const DEFAULT_PERSON_ENDPOINT: &str = "https://person.api.sso.mozilla.com";

/// Configuration for the directory client
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// OAuth2 token endpoint URL
    pub auth_endpoint: String,
    /// OAuth2 client ID (required)
    pub client_id: String,
    /// OAuth2 client secret (required)
    pub client_secret: String,
    /// Audience parameter sent with the token request
    pub audience: String,
    /// Scopes requested from the token endpoint
    pub scopes: Vec<String>,
    /// Person directory base URL
    pub person_endpoint: String,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            audience: String::new(),
            scopes: Vec::new(),
            person_endpoint: DEFAULT_PERSON_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DirectoryConfig {
    /// Build a configuration from the environment.
    ///
    /// Reads `AUTH0_ENDPOINT`, `AUTH0_CLIENT_ID`, `AUTH0_CLIENT_SECRET`,
    /// `AUTH0_AUDIENCE`, `AUTH0_SCOPES` (space-separated) and
    /// `PERSON_ENDPOINT`. Unset endpoints fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AUTH0_ENDPOINT") {
            if !v.is_empty() {
                config.auth_endpoint = v;
            }
        }
        if let Ok(v) = std::env::var("AUTH0_CLIENT_ID") {
            config.client_id = v;
        }
        if let Ok(v) = std::env::var("AUTH0_CLIENT_SECRET") {
            config.client_secret = v;
        }
        if let Ok(v) = std::env::var("AUTH0_AUDIENCE") {
            config.audience = v;
        }
        if let Ok(v) = std::env::var("AUTH0_SCOPES") {
            config.scopes = v.split_whitespace().map(str::to_string).collect();
        }
        if let Ok(v) = std::env::var("PERSON_ENDPOINT") {
            if !v.is_empty() {
                config.person_endpoint = v;
            }
        }

        config
    }

    /// Check that the configuration is usable before building a client.
    ///
    /// Missing credentials are a configuration error the adapter must raise
    /// up front, never a mid-request surprise.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(DirectoryError::configuration(
                "Client ID not found in AUTH0_CLIENT_ID environment variable or configuration",
            ));
        }
        if self.client_secret.is_empty() {
            return Err(DirectoryError::configuration(
                "Client secret not found in AUTH0_CLIENT_SECRET environment variable or configuration",
            ));
        }
        Ok(())
    }
}
