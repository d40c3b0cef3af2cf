//! Normalization of the platform's loosely-typed model output
//!
//! The upstream contract is unversioned and has drifted across
//! deployments: the same model call has returned a named base64 field, a
//! raw binary body, a byte stream, and byte payloads wrapped one level
//! deep. This module reconciles all of them through a single ordered
//! dispatch so the rest of the relay only ever sees one payload shape.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures::StreamExt;
use serde_json::Value;

use crate::error::{RelayError, Result};
use crate::types::{ByteStream, RawOutput};

/// Recognized output shapes, probed richest-first
enum Shape {
    /// Payload already encoded under a named field
    NamedBase64(String),
    /// Byte sequence available in memory
    RawBytes(Vec<u8>),
    /// Lazy byte stream still to be drained
    Stream(ByteStream),
    /// Payload wrapped one level deep under `data` or `image`
    Nested(Value),
    /// Nothing from the recognized set
    Unrecognized(String),
}

/// Produce the base64 image payload from whatever the platform returned
///
/// Probe order: named base64 field, in-memory bytes, byte stream, then a
/// single unwrap of a nested `data`/`image` field. A payload that decodes
/// to zero bytes is an error, never a success.
pub async fn image_base64(output: RawOutput) -> Result<String> {
    let mut shape = classify(output);
    let mut unwrapped = false;

    loop {
        match shape {
            Shape::NamedBase64(encoded) => return require_non_empty(encoded),
            Shape::RawBytes(bytes) => return encode(&bytes),
            Shape::Stream(stream) => return encode(&drain(stream).await?),
            Shape::Nested(inner) => {
                // unwrapping stops at one level
                if unwrapped {
                    return Err(RelayError::UnrecognizedShape {
                        description: "payload nested more than one level deep".to_string(),
                    });
                }
                unwrapped = true;
                shape = classify_nested(inner);
            }
            Shape::Unrecognized(description) => {
                return Err(RelayError::UnrecognizedShape { description });
            }
        }
    }
}

/// Extract the text response from the model output
///
/// Text models have only ever returned `{"response": string}`; anything
/// else is contract drift and is rejected with a structural description.
pub fn text(output: RawOutput) -> Result<String> {
    let value = match output {
        RawOutput::Json(value) => value,
        other => {
            return Err(RelayError::UnrecognizedShape {
                description: format!("{} payload where a JSON text response was expected", other.kind()),
            });
        }
    };

    match value {
        Value::Object(map) => match map.get("response") {
            Some(Value::String(response)) if !response.trim().is_empty() => Ok(response.clone()),
            Some(Value::String(_)) => Err(RelayError::EmptyPayload),
            Some(other) => Err(RelayError::UnrecognizedShape {
                description: format!("`response` holds a JSON {}, expected a string", json_type(other)),
            }),
            None => Err(RelayError::UnrecognizedShape {
                description: describe_object(&map),
            }),
        },
        other => Err(RelayError::UnrecognizedShape {
            description: format!("JSON {}", json_type(&other)),
        }),
    }
}

fn classify(output: RawOutput) -> Shape {
    match output {
        RawOutput::Bytes(bytes) => Shape::RawBytes(bytes),
        RawOutput::Stream(stream) => Shape::Stream(stream),
        RawOutput::Json(value) => classify_json(value),
    }
}

fn classify_json(value: Value) -> Shape {
    match value {
        Value::Object(mut map) => {
            if let Some(field) = map.remove("image_base64") {
                return match field {
                    Value::String(encoded) => Shape::NamedBase64(encoded),
                    other => Shape::Unrecognized(format!(
                        "`image_base64` holds a JSON {}, expected a string",
                        json_type(&other)
                    )),
                };
            }
            if let Some(inner) = map.remove("data") {
                return Shape::Nested(inner);
            }
            if let Some(inner) = map.remove("image") {
                return Shape::Nested(inner);
            }
            Shape::Unrecognized(describe_object(&map))
        }
        Value::Array(items) => byte_array(items),
        other => Shape::Unrecognized(format!("JSON {}", json_type(&other))),
    }
}

/// Classify a value unwrapped from `data`/`image`
///
/// A nested string is taken as an already-encoded payload; a nested
/// array as bytes. Deeper containers are not probed.
fn classify_nested(value: Value) -> Shape {
    match value {
        Value::String(encoded) => Shape::NamedBase64(encoded),
        Value::Array(items) => byte_array(items),
        other => Shape::Unrecognized(format!("nested JSON {}", json_type(&other))),
    }
}

fn byte_array(items: Vec<Value>) -> Shape {
    let mut bytes = Vec::with_capacity(items.len());
    for item in &items {
        let Some(byte) = item.as_u64().and_then(|n| u8::try_from(n).ok()) else {
            return Shape::Unrecognized(format!(
                "array of {} elements that are not all bytes",
                items.len()
            ));
        };
        bytes.push(byte);
    }
    Shape::RawBytes(bytes)
}

fn require_non_empty(encoded: String) -> Result<String> {
    if encoded.is_empty() {
        return Err(RelayError::EmptyPayload);
    }
    Ok(encoded)
}

fn encode(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(RelayError::EmptyPayload);
    }
    Ok(STANDARD.encode(bytes))
}

async fn drain(mut stream: ByteStream) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk
            .map_err(|e| RelayError::Upstream(format!("failed reading upstream byte stream: {e}")))?;
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

/// Structural type name; payload contents never appear in diagnostics
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe_object(map: &serde_json::Map<String, Value>) -> String {
    let keys = map.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("JSON object with keys [{keys}]")
}
