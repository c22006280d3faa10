//! Transport errors
//!
//! Any failure of a single remote call (network, HTTP 4xx/5xx, undecodable
//! payload) is reported as an opaque `TransportError`. Callers decide
//! whether to retry; this crate never does.

use thiserror::Error;

/// Failure of a single GitHub API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying cause as reported by the transport
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<octocrab::Error> for TransportError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => Self::new(format!(
                "GitHub API error ({}): {}",
                source.status_code, source.message
            )),
            _ => Self::new(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Failed to decode response: {}", err))
    }
}
