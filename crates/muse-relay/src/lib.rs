#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod binding;
mod error;
mod normalize;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};

pub use error::{ErrorEnvelope, RelayError, Result};
pub use server::{Relay, RelayBuilder};
pub use types::{ByteStream, GenerateRequest, ImageEnvelope, ImagePayload, RawOutput, TextEnvelope};

/// Build the relay from configuration
pub fn build_relay(config: &muse_config::Config) -> Arc<Relay> {
    Arc::new(RelayBuilder::new(config).build())
}

/// Create the endpoint router for the two generation paths
pub fn endpoint_router() -> Router<Arc<Relay>> {
    Router::new()
        .route("/ai", post(generate_image))
        .route("/generate-text", post(generate_text))
}

/// Handle image generation requests
async fn generate_image(
    State(relay): State<Arc<Relay>>,
    body: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<ImageEnvelope>> {
    let Json(request) = body.map_err(reject_body)?;

    let envelope = relay.generate_image(&request.prompt).await?;

    tracing::debug!("image generation complete");

    Ok(Json(envelope))
}

/// Handle text generation requests
async fn generate_text(
    State(relay): State<Arc<Relay>>,
    body: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<TextEnvelope>> {
    let Json(request) = body.map_err(reject_body)?;

    let envelope = relay.generate_text(&request.prompt).await?;

    tracing::debug!("text generation complete");

    Ok(Json(envelope))
}

/// A body without a string prompt is the caller's fault
fn reject_body(rejection: JsonRejection) -> RelayError {
    tracing::debug!(error = %rejection, "rejecting malformed generation request body");
    RelayError::InvalidInput("Prompt is required.".to_string())
}
