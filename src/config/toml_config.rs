use crate::core::chat::{ChatSettings, DEFAULT_USER_AGENT};
use crate::core::preload::PreloadPlan;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub site: SiteConfig,
    pub chat: Option<ChatConfig>,
    pub images: Option<ImagesConfig>,
    pub preferences: Option<PreferencesConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "AI4U".to_string(),
            base_url: "https://ai4u.example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub webhook_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagesConfig {
    pub mapping: Option<String>,
    pub timeout_seconds: Option<u64>,
    /// 是否把目錄縮圖加入預載清單
    pub include_catalog: Option<bool>,
    #[serde(default)]
    pub critical: Vec<String>,
    #[serde(default)]
    pub important: Vec<String>,
    #[serde(default)]
    pub background: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHAT_WEBHOOK_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn chat_settings(&self) -> Result<ChatSettings> {
        let chat = self
            .chat
            .as_ref()
            .ok_or_else(|| CatalogError::MissingConfigError {
                field: "chat.webhook_url".to_string(),
            })?;

        let mut settings = ChatSettings::new(chat.webhook_url.clone());
        settings.page_url = self.site.base_url.clone();
        settings.user_agent = chat
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        settings.timeout = chat.timeout_seconds.map(Duration::from_secs);
        Ok(settings)
    }

    pub fn image_timeout(&self) -> Option<Duration> {
        self.images
            .as_ref()
            .and_then(|images| images.timeout_seconds)
            .map(Duration::from_secs)
    }

    pub fn image_mapping_source(&self) -> Option<&str> {
        self.images.as_ref().and_then(|images| images.mapping.as_deref())
    }

    pub fn include_catalog_images(&self) -> bool {
        self.images
            .as_ref()
            .and_then(|images| images.include_catalog)
            .unwrap_or(true)
    }

    /// 配置檔中明確列出的預載清單
    pub fn preload_plan(&self) -> PreloadPlan {
        match &self.images {
            Some(images) => PreloadPlan {
                critical: images.critical.clone(),
                important: images.important.clone(),
                background: images.background.clone(),
            },
            None => PreloadPlan::default(),
        }
    }

    pub fn preferences_path(&self) -> Option<&str> {
        self.preferences.as_ref().map(|p| p.path.as_str())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("site.base_url", &self.site.base_url)?;

        if let Some(chat) = &self.chat {
            validation::validate_url("chat.webhook_url", &chat.webhook_url)?;
            if let Some(timeout) = chat.timeout_seconds {
                validation::validate_range("chat.timeout_seconds", timeout, 1, 300)?;
            }
        }

        if let Some(images) = &self.images {
            if let Some(mapping) = &images.mapping {
                validation::validate_source("images.mapping", mapping)?;
            }
            if let Some(timeout) = images.timeout_seconds {
                validation::validate_range("images.timeout_seconds", timeout, 1, 300)?;
            }
        }

        if let Some(preferences) = &self.preferences {
            validation::validate_path("preferences.path", &preferences.path)?;
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r#"
[site]
name = "AI4U"
base_url = "https://ai4u.example.com"

[chat]
webhook_url = "https://hooks.example.com/webhook/chat"
timeout_seconds = 15

[images]
mapping = "./public/image-mapping.json"
include_catalog = false
critical = ["/images/hero.webp", "/images/logo.svg"]
background = ["/images/team.webp"]

[preferences]
path = "./.ai4u/preferences.json"

[logging]
level = "debug"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(FULL_CONFIG).unwrap();
        assert!(config.validate().is_ok());

        let settings = config.chat_settings().unwrap();
        assert_eq!(settings.webhook_url, "https://hooks.example.com/webhook/chat");
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.page_url, "https://ai4u.example.com");

        let plan = config.preload_plan();
        assert_eq!(plan.critical.len(), 2);
        assert!(plan.important.is_empty());
        assert_eq!(plan.background, vec!["/images/team.webp"]);
        assert!(!config.include_catalog_images());
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.site.name, "AI4U");
        assert!(config.include_catalog_images());
        assert!(matches!(
            config.chat_settings(),
            Err(CatalogError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AI4U_TEST_WEBHOOK", "https://env.example.com/hook");
        let config = TomlConfig::from_toml_str(
            r#"
[chat]
webhook_url = "${AI4U_TEST_WEBHOOK}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.chat.unwrap().webhook_url,
            "https://env.example.com/hook"
        );
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[chat]
webhook_url = "${AI4U_TEST_DEFINITELY_UNSET}"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ai4u.toml");
        std::fs::write(&path, FULL_CONFIG).unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.preferences_path(), Some("./.ai4u/preferences.json"));
        assert!(TomlConfig::from_file(temp_dir.path().join("missing.toml")).is_err());
    }
}
