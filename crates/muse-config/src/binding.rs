use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Upstream generation platform binding
///
/// Model invocations POST to `{base_url}/{model}`; the platform's
/// response shape is not under our control and is normalized downstream.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConfig {
    /// Base URL of the model-serving endpoint
    pub base_url: Url,
    /// Bearer token for the platform, when it requires one
    #[serde(default)]
    pub api_key: Option<SecretString>,
}
