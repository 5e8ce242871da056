//! OAuth2 Token Manager
//!
//! Performs the client-credentials grant against the configured token
//! endpoint and caches the resulting bearer token for reuse. The cache holds
//! at most one token; it is never proactively refreshed. Callers that hit a
//! stale token invalidate and re-acquire themselves.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};

/// Client-credentials token request (form-urlencoded, RFC 6749 §4.4)
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

/// Token response. The endpoint also reports `token_type` and `expires_in`;
/// expiry is not enforced here (the cached token lives until invalidated).
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Holds the single cached access token shared across lookups.
///
/// Concurrent callers that both observe an empty cache will both perform the
/// grant; that is benign (both grants succeed independently, last writer
/// wins), so the lock is held only around the cache, never across the
/// network call.
pub struct TokenManager {
    config: DirectoryConfig,
    client: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl TokenManager {
    pub fn new(config: DirectoryConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            client,
            token: RwLock::new(None),
        }
    }

    /// Return the cached token, acquiring one via the client-credentials
    /// grant if none is held. On grant failure nothing is cached and the
    /// error is surfaced unchanged.
    pub async fn token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let token = self.grant().await?;
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Drop the cached token so the next call performs a fresh grant.
    pub async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    async fn grant(&self) -> Result<String> {
        let scope = if self.config.scopes.is_empty() {
            None
        } else {
            Some(self.config.scopes.join(" "))
        };

        let request = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            audience: &self.config.audience,
            scope,
        };

        debug!("Requesting access token from {}", self.config.auth_endpoint);

        let response = self
            .client
            .post(&self.config.auth_endpoint)
            .form(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Token request failed with status {}", status);
            return Err(DirectoryError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token_response: TokenResponse = response.json().await?;
        info!("Acquired access token");
        Ok(token_response.access_token)
    }
}
