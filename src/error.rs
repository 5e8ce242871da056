//! Directory Client Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Lookup by {kind} is not supported")]
    Unsupported { kind: String },

    #[error("Token request failed with status {status}: {body}")]
    Auth { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Directory service responded with status {status}")]
    Status { status: u16 },

    #[error("Failed to decode directory response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DirectoryError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }

    /// True for failures where the whole `resolve` call can be retried by
    /// the caller without changing its inputs.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Configuration { .. } | Self::Unsupported { .. } | Self::Decode(_) => false,
            Self::Auth { status, .. } => *status >= 500,
            Self::Transport(_) => true,
            Self::Status { status } => *status >= 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(!DirectoryError::configuration("missing client id").is_retryable());
        assert!(!DirectoryError::unsupported("id").is_retryable());
        assert!(!DirectoryError::Status { status: 404 }.is_retryable());
        assert!(DirectoryError::Status { status: 503 }.is_retryable());
        assert!(!DirectoryError::Auth {
            status: 401,
            body: "invalid_client".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = DirectoryError::Status { status: 404 };
        assert_eq!(
            err.to_string(),
            "Directory service responded with status 404"
        );

        let err = DirectoryError::unsupported("username");
        assert_eq!(err.to_string(), "Lookup by username is not supported");
    }
}
