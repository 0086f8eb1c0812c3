//! # Client Error Types
//!
//! Unified error handling for Postiz API calls.

use std::path::PathBuf;

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Postiz API error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Upload failed: {status} - {body}")]
    UploadFailed { status: u16, body: String },

    #[error("Failed to read {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Create an API error from HTTP response
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            body: body.into(),
        }
    }

    /// Create an upload error from HTTP response
    pub fn upload_failed(status: u16, body: impl Into<String>) -> Self {
        Self::UploadFailed {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// HTTP status reported by the remote service, if the failure came from one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } | ClientError::UploadFailed { status, .. } => {
                Some(*status)
            }
            ClientError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the remote service answered with a non-success status.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ClientError::ApiError { .. } | ClientError::UploadFailed { .. }
        )
    }
}
