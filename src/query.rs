//! Lookup Queries and Identifier Constraints
//!
//! A caller supplies a partially-filled identifier set; the constraint check
//! decides which lookup is legal before any network call is made.

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

/// The identifier a lookup is keyed by.
///
/// Only `Email` has a resolution path today. `Id` and `Username` are accepted
/// by the surrounding schema but rejected with an explicit error rather than
/// silently no-opped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Email(String),
    Id(String),
    Username(String),
}

impl LookupKey {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Id(_) => "id",
            Self::Username(_) => "username",
        }
    }
}

/// Identifier set supplied by the host adapter.
///
/// Empty strings count as unset, matching the adapter's persisted state
/// format where absent attributes marshal to `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl PersonQuery {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    fn email_value(&self) -> Option<&str> {
        self.email.as_deref().filter(|v| !v.is_empty())
    }

    fn id_value(&self) -> Option<&str> {
        self.id.as_deref().filter(|v| !v.is_empty())
    }

    fn username_value(&self) -> Option<&str> {
        self.username.as_deref().filter(|v| !v.is_empty())
    }

    /// Select the lookup key for this identifier set.
    ///
    /// At least one of email, id, username must be non-empty. When several
    /// are set, email takes precedence; an id or username without an email
    /// is rejected because those resolution paths do not exist.
    pub fn lookup_key(&self) -> Result<LookupKey> {
        if let Some(email) = self.email_value() {
            return Ok(LookupKey::Email(email.to_string()));
        }
        if self.id_value().is_some() {
            return Err(DirectoryError::unsupported("id"));
        }
        if self.username_value().is_some() {
            return Err(DirectoryError::unsupported("username"));
        }
        Err(DirectoryError::configuration(
            "At least one of email, id, username must be set",
        ))
    }
}
