use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};

/// Prompt payload accepted by both generation endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Text description of the desired image, or the user's message
    pub prompt: String,
}

/// Success envelope for the image path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEnvelope {
    pub result: ImagePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Standard base64, padded, no line wrapping
    pub image_base64: String,
}

/// Success envelope for the text path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEnvelope {
    pub response: String,
}

/// Lazily consumed upstream byte stream
pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// Untyped output returned by the generation binding
///
/// The platform's response contract is unversioned and has been observed
/// to change without notice; downstream normalization is responsible for
/// reconciling whatever arrives into one stable payload.
pub enum RawOutput {
    /// Structured JSON document
    Json(serde_json::Value),
    /// Binary body already collected in memory
    Bytes(Vec<u8>),
    /// Binary body still on the wire
    Stream(ByteStream),
}

impl RawOutput {
    /// Variant name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Bytes(_) => "bytes",
            Self::Stream(_) => "stream",
        }
    }
}
