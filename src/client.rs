//! Directory Client
//!
//! Resolves a person record by email against the directory service. One
//! outbound GET per call, no internal retries; the token is obtained lazily
//! from the token manager before the first request. Cancellation follows the
//! caller's future: dropping a `resolve` call aborts the in-flight request.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::person::Person;
use crate::query::{LookupKey, PersonQuery};
use crate::token::TokenManager;

/// Seam for host adapters that only need email resolution.
#[async_trait]
pub trait PersonResolver: Send + Sync {
    async fn resolve_by_email(&self, email: &str) -> Result<Person>;
}

/// Client for the person directory service
pub struct DirectoryClient {
    config: DirectoryConfig,
    client: reqwest::Client,
    tokens: TokenManager,
}

impl DirectoryClient {
    /// Build a client from a validated configuration.
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        let tokens = TokenManager::new(config.clone(), client.clone());

        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    /// Resolve a person for the given identifier set.
    ///
    /// The identifier constraint is checked before any network I/O; an
    /// ineligible query never produces a request.
    pub async fn resolve(&self, query: &PersonQuery) -> Result<Person> {
        match query.lookup_key()? {
            LookupKey::Email(email) => self.fetch_by_email(&email).await,
            other => Err(DirectoryError::unsupported(other.kind())),
        }
    }

    /// Drop the cached access token; the next resolve performs a new grant.
    pub async fn invalidate_token(&self) {
        self.tokens.invalidate().await;
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Person> {
        let token = self.tokens.token().await?;

        let url = format!(
            "{}/v2/user/primary_email/{}",
            self.config.person_endpoint,
            urlencoding::encode(email)
        );
        debug!("Fetching person record from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            warn!("Directory request failed with status {}", status);
            return Err(DirectoryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Person::from_json(&body)
    }
}

#[async_trait]
impl PersonResolver for DirectoryClient {
    async fn resolve_by_email(&self, email: &str) -> Result<Person> {
        self.resolve(&PersonQuery::by_email(email)).await
    }
}
