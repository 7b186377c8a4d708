#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Settings handed to the model client. The credential is resolved once at
/// start-up and passed in here; nothing below reads the environment.
#[derive(Clone)]
pub struct ModelSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
}

/// Values supplied by the command line (or the environment, via clap).
#[derive(Debug, Clone, Default)]
pub struct SettingOverrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

impl ModelSettings {
    /// Merge sources. Precedence: explicit overrides, then `fallback_api_key`
    /// (the legacy `API_KEY` variable), then the config file, then defaults.
    pub fn resolve(
        overrides: SettingOverrides,
        fallback_api_key: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let file_gemini = file.map(|f| f.gemini.clone()).unwrap_or_default();

        let api_key = overrides
            .api_key
            .or(fallback_api_key)
            .or(file_gemini.api_key)
            .filter(|key| !key.trim().is_empty());
        let api_key = validation::validate_required_field("api_key", &api_key)?.clone();

        let settings = Self {
            endpoint: overrides
                .endpoint
                .or(file_gemini.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: overrides
                .model
                .or(file_gemini.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        };
        settings.validate()?;
        Ok(settings)
    }
}

// Key stays out of debug logs.
impl std::fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSettings")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Validate for ModelSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_resolved("api_key", &self.api_key)?;
        Ok(())
    }
}

impl ConfigProvider for ModelSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}
