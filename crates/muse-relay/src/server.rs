use serde_json::json;

use crate::{
    binding::{GenerationBinding, http::HttpBinding},
    error::{RelayError, Result},
    normalize,
    types::{ImageEnvelope, ImagePayload, TextEnvelope},
};

/// Relay forwarding validated prompts to the configured binding
///
/// Stateless per invocation; the binding call is the only suspension
/// point besides draining a streamed body.
pub struct Relay {
    binding: Option<Box<dyn GenerationBinding>>,
    image_model: String,
    text_model: String,
}

impl Relay {
    /// Generate an image and wrap it in the stable envelope
    pub async fn generate_image(&self, prompt: &str) -> Result<ImageEnvelope> {
        let prompt = validated_prompt(prompt)?;
        let binding = self.binding()?;

        let inputs = json!({ "prompt": prompt });
        let raw = binding.run(&self.image_model, &inputs).await?;

        tracing::debug!(
            binding = binding.name(),
            model = %self.image_model,
            shape = raw.kind(),
            "received model output"
        );

        let image_base64 = normalize::image_base64(raw).await?;
        Ok(ImageEnvelope {
            result: ImagePayload { image_base64 },
        })
    }

    /// Generate a text completion and wrap it in the stable envelope
    pub async fn generate_text(&self, prompt: &str) -> Result<TextEnvelope> {
        let prompt = validated_prompt(prompt)?;
        let binding = self.binding()?;

        let inputs = json!({
            "messages": [{ "role": "user", "content": prompt }]
        });
        let raw = binding.run(&self.text_model, &inputs).await?;

        tracing::debug!(
            binding = binding.name(),
            model = %self.text_model,
            shape = raw.kind(),
            "received model output"
        );

        let response = normalize::text(raw)?;
        Ok(TextEnvelope { response })
    }

    fn binding(&self) -> Result<&dyn GenerationBinding> {
        self.binding.as_deref().ok_or(RelayError::BindingMissing)
    }
}

/// Trim the prompt and reject blank input
fn validated_prompt(prompt: &str) -> Result<&str> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(RelayError::InvalidInput("Prompt is required.".to_string()));
    }
    Ok(prompt)
}

/// Builder for constructing the relay from configuration
pub struct RelayBuilder<'a> {
    config: &'a muse_config::Config,
}

impl<'a> RelayBuilder<'a> {
    pub fn new(config: &'a muse_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Relay {
        let binding: Option<Box<dyn GenerationBinding>> =
            self.config.binding.as_ref().map(|binding_config| {
                tracing::debug!(base_url = %binding_config.base_url, "initializing generation binding");

                Box::new(HttpBinding::new(
                    binding_config.base_url.clone(),
                    binding_config.api_key.clone(),
                )) as Box<dyn GenerationBinding>
            });

        if binding.is_none() {
            tracing::warn!("no generation binding configured; generation requests will fail");
        }

        Relay {
            binding,
            image_model: self.config.generation.image_model.clone(),
            text_model: self.config.generation.text_model.clone(),
        }
    }
}
