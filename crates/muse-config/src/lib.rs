#![allow(clippy::must_use_candidate)]

pub mod binding;
pub mod cors;
mod env;
pub mod generation;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use binding::BindingConfig;
pub use cors::{AnyOrList, CorsConfig};
pub use generation::GenerationConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;

/// Top-level muse configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream generation binding; requests fail with a configuration
    /// error when absent
    #[serde(default)]
    pub binding: Option<BindingConfig>,
    /// Model identifiers for the two generation paths
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
