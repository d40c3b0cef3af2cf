use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the binding URL or model identifiers are invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref binding) = self.binding {
            let scheme = binding.base_url.scheme();
            if scheme != "http" && scheme != "https" {
                anyhow::bail!("binding.base_url must use http or https, got `{scheme}`");
            }
        }

        if self.generation.image_model.trim().is_empty() {
            anyhow::bail!("generation.image_model must not be empty");
        }
        if self.generation.text_model.trim().is_empty() {
            anyhow::bail!("generation.text_model must not be empty");
        }

        Ok(())
    }
}
