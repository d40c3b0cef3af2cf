use serde::Deserialize;

/// Model identifiers for the image and text generation paths
///
/// Defaults match the deployed Workers AI models.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            image_model: default_image_model(),
            text_model: default_text_model(),
        }
    }
}

fn default_image_model() -> String {
    "@cf/stabilityai/stable-diffusion-xl-lightning".to_string()
}

fn default_text_model() -> String {
    "@cf/meta/llama-2-7b-chat-int8".to_string()
}
