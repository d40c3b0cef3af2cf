/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from the relay client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay (or something in front of it) returned an error response
    #[error("upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Best-effort human-readable message from the body
        message: String,
    },

    /// The relay's own response did not match the stable envelope
    #[error("malformed relay response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A generation request is already in flight for this control
    #[error("a generation request is already in flight")]
    Busy,
}
