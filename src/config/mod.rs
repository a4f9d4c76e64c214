#[cfg(feature = "cli")]
pub mod cli;
pub mod preferences;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ai4u-catalog")]
#[command(about = "Browse the AI4U service catalog, preload images and talk to the chat webhook")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(long, short, global = true)]
    pub config: Option<String>,

    /// Preferences file (overrides [preferences].path)
    #[arg(long, global = true)]
    pub preferences: Option<String>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub const DEFAULT_PREFERENCES_PATH: &'static str = ".ai4u/preferences.json";

    pub fn load_toml(&self) -> crate::utils::error::Result<toml_config::TomlConfig> {
        match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path),
            None => Ok(toml_config::TomlConfig::default()),
        }
    }

    pub fn preferences_path(&self, config: &toml_config::TomlConfig) -> String {
        self.preferences
            .clone()
            .or_else(|| config.preferences_path().map(str::to_string))
            .unwrap_or_else(|| Self::DEFAULT_PREFERENCES_PATH.to_string())
    }
}
