use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Relay errors with appropriate HTTP status codes
///
/// Every failure path in the relay funnels into this type; nothing
/// reaches the transport layer as an unhandled fault.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Prompt missing, not a string, or blank after trimming
    #[error("{0}")]
    InvalidInput(String),

    /// No generation binding configured
    #[error("AI service not configured correctly: missing generation binding")]
    BindingMissing,

    /// The upstream generation call failed
    #[error("upstream generation call failed: {0}")]
    Upstream(String),

    /// The upstream returned a shape outside the recognized set
    #[error("AI model returned an unexpected response format")]
    UnrecognizedShape {
        /// Structural description of what arrived (type and key names only)
        description: String,
    },

    /// The decoded payload was empty
    #[error("AI model returned an empty payload")]
    EmptyPayload,

    /// Unexpected internal error
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::BindingMissing
            | Self::Upstream(_)
            | Self::UnrecognizedShape { .. }
            | Self::EmptyPayload
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Supplementary diagnostic text for the wire envelope
    fn details(&self) -> Option<String> {
        match self {
            Self::UnrecognizedShape { description } => Some(description.clone()),
            Self::Internal(source) => Some(format!("{source:#}")),
            _ => None,
        }
    }
}

/// Error wire shape returned to the caller
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = ErrorEnvelope {
            error: self.to_string(),
            details: self.details(),
        };

        (status, Json(envelope)).into_response()
    }
}
