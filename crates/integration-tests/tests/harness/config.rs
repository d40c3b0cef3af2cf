//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use muse_config::{BindingConfig, Config, GenerationConfig, HealthConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                binding: None,
                generation: GenerationConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the generation binding at a mock platform
    pub fn with_binding(mut self, base_url: &str) -> Self {
        self.config.binding = Some(BindingConfig {
            base_url: base_url.parse().expect("valid URL"),
            api_key: Some(SecretString::from("test-key")),
        });
        self
    }

    /// Override the model identifiers
    pub fn with_models(mut self, image_model: &str, text_model: &str) -> Self {
        self.config.generation = GenerationConfig {
            image_model: image_model.to_owned(),
            text_model: text_model.to_owned(),
        };
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
