//! Error types for fraudscan.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the local side of fraudscan (storage, config, bookkeeping).
///
/// Failures of the remote analysis service are reported separately through
/// [`TransportError`], since they are surfaced to the user rather than
/// handled as storage problems.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FraudScanError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FraudScanError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FraudScanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FraudScanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FraudScanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for FraudScanError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for FraudScanError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, FraudScanError>`.
pub type Result<T> = std::result::Result<T, FraudScanError>;

/// Failure talking to the remote analysis service.
///
/// None of these variants is kept in session state; the scan returns them to
/// the caller and the session falls back to idle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("Analysis service unreachable: {message}")]
    Network { message: String, is_timeout: bool },

    /// The service answered with a non-2xx status.
    #[error("Analysis service error ({status}): {message}")]
    Http { status: u16, message: String },

    /// A 2xx answer whose body could not be validated.
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    /// The request was abandoned because a newer scan replaced it.
    #[error("Scan cancelled")]
    Cancelled,
}

impl TransportError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Message suitable for a user-facing notice.
    ///
    /// HTTP failures show the server's own `error` text when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
