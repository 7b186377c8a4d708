use super::{ModelSettings, SettingOverrides, TomlConfig};
use crate::app::OutputMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "domain-checker")]
#[command(about = "Check domain availability and get suggestions from Gemini (simulated, not a registry lookup)")]
pub struct CliConfig {
    /// Domain to check. Without it, domains are read line by line from stdin.
    pub domain: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Gemini model name [default: gemini-2.5-flash]")]
    pub model: Option<String>,

    #[arg(long, help = "Gemini API base URL")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingOverrides {
        SettingOverrides {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
        }
    }

    /// Load the config file (if any) and resolve model settings and output
    /// mode. `--json` or `[output] json = true` selects JSON output.
    pub fn load_settings(
        &self,
        fallback_api_key: Option<String>,
    ) -> Result<(ModelSettings, OutputMode)> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let json = self.json || file.as_ref().is_some_and(TomlConfig::json_output);
        let output = if json { OutputMode::Json } else { OutputMode::Cards };

        let settings = ModelSettings::resolve(self.overrides(), fallback_api_key, file.as_ref())?;
        Ok((settings, output))
    }
}
