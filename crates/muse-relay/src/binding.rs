pub(crate) mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::{error::Result, types::RawOutput};

/// Trait for the generation platform binding
///
/// The platform is an external dependency and its response shape is
/// outside this system's control. The trait returns the untyped
/// [`RawOutput`]; callers normalize it.
#[async_trait]
pub(crate) trait GenerationBinding: Send + Sync {
    /// Invoke a model with the given inputs document
    async fn run(&self, model: &str, inputs: &Value) -> Result<RawOutput>;

    /// Get the binding name
    fn name(&self) -> &str;
}
