use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, Result};

/// Typed caller for the muse relay
///
/// One request per call, no retries; every failure surfaces as a
/// [`ClientError`] the presentation layer can show.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: Url,
    http: Client,
}

/// Wire shape of the relay's image success envelope
#[derive(Debug, Deserialize)]
struct ImageEnvelope {
    result: ImagePayload,
}

#[derive(Debug, Deserialize)]
struct ImagePayload {
    image_base64: String,
}

/// Wire shape of the relay's text success envelope
#[derive(Debug, Deserialize)]
struct TextEnvelope {
    response: String,
}

impl RelayClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            http: Client::new(),
        })
    }

    /// Request an image for the prompt
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the relay reports an
    /// error, or the success body does not carry an image payload
    pub async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        let body = self.post("/ai", prompt).await?;

        let envelope: ImageEnvelope = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("expected image envelope: {e}")))?;

        if envelope.result.image_base64.is_empty() {
            return Err(ClientError::MalformedResponse(
                "image payload is empty".to_string(),
            ));
        }

        Ok(GeneratedImage {
            base64: envelope.result.image_base64,
        })
    }

    /// Request a text completion for the prompt
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the relay reports an
    /// error, or the success body does not carry a response string
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let body = self.post("/generate-text", prompt).await?;

        let envelope: TextEnvelope = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("expected text envelope: {e}")))?;

        if envelope.response.is_empty() {
            return Err(ClientError::MalformedResponse(
                "text payload is empty".to_string(),
            ));
        }

        Ok(envelope.response)
    }

    /// POST the prompt and return the success body as text
    async fn post(&self, path: &str, prompt: &str) -> Result<String> {
        let url = make_url(&self.base_url, path);

        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;

        let response = handle_error(response).await?;
        Ok(response.text().await?)
    }
}

/// Image payload unwrapped from the relay envelope
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    base64: String,
}

impl GeneratedImage {
    /// Raw base64 payload
    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    /// `data:` URI suitable for an image element
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }
}

fn make_url(base_url: &Url, path: &str) -> String {
    format!("{}{path}", base_url.as_str().trim_end_matches('/'))
}

/// Check an HTTP response for errors
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The body may not be JSON at all when the failure happened in front
    // of the relay's own error handling; read it as text first.
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.to_string()
    } else {
        parse_error_body(&body)
    };

    Err(ClientError::Upstream {
        status: status.as_u16(),
        message,
    })
}

/// Extract a human-readable message from an error body
///
/// Falls back to the raw text when the body is not JSON or carries no
/// recognized message field.
fn parse_error_body(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json["error"].as_str() {
            return message.to_owned();
        }
        // some deployments nest the message one level down
        if let Some(message) = json["error"]["message"].as_str() {
            return message.to_owned();
        }
        if let Some(message) = json["message"].as_str() {
            return message.to_owned();
        }
    }
    body.to_owned()
}
