use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use super::GenerationBinding;
use crate::{
    error::{RelayError, Result},
    types::RawOutput,
};

/// HTTP binding to the model-serving platform
///
/// Invocations POST the inputs document to `{base_url}/{model}`. JSON
/// responses are parsed; any other content type is handed back as a
/// byte stream for normalization to drain.
pub(crate) struct HttpBinding {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl HttpBinding {
    pub fn new(base_url: Url, api_key: Option<SecretString>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl GenerationBinding for HttpBinding {
    async fn run(&self, model: &str, inputs: &Value) -> Result<RawOutput> {
        let url = format!("{}/{model}", self.base_url.as_str().trim_end_matches('/'));

        tracing::debug!(%model, "invoking generation model");

        let mut request = self.client.post(url).json(inputs);
        if let Some(ref api_key) = self.api_key {
            request = request.header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            );
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%model, error = %e, "generation request failed");
            RelayError::Upstream(format!("failed to reach generation platform: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(%model, %status, "generation platform returned an error");

            return Err(RelayError::Upstream(format!(
                "platform returned {status}: {}",
                snippet(&body)
            )));
        }

        if is_json(response.headers()) {
            let value = response.json::<Value>().await.map_err(|e| {
                RelayError::Upstream(format!("invalid JSON from generation platform: {e}"))
            })?;
            Ok(RawOutput::Json(value))
        } else {
            let stream = response.bytes_stream().map_err(std::io::Error::other);
            Ok(RawOutput::Stream(Box::pin(stream)))
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Bounded excerpt of an upstream error body for diagnostics
fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;

    let mut excerpt: String = body.chars().take(MAX_CHARS).collect();
    if body.chars().count() > MAX_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}
