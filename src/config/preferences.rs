use crate::domain::ports::PreferenceStore;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const LANGUAGE_KEY: &str = "ai4u-language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 以 JSON 檔案保存的鍵值設定
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => Ok(values),
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Ignoring unreadable preferences file {}: {}",
                        self.path.display(),
                        e
                    );
                    Ok(BTreeMap::new())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(&values)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// 介面語言狀態：啟動時讀取一次，每次切換都寫回
pub struct LanguagePreference<S: PreferenceStore> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    pub async fn load(store: S) -> Self {
        let current = match store.read(LANGUAGE_KEY).await {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("⚠️ {}, falling back to default language", e);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::warn!("⚠️ Could not read language preference: {}", e);
                Language::default()
            }
        };

        Self { store, current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub async fn set(&mut self, language: Language) -> Result<()> {
        self.current = language;
        self.store.write(LANGUAGE_KEY, language.code()).await?;
        tracing::debug!("Language preference saved: {}", language);
        Ok(())
    }

    pub async fn toggle(&mut self) -> Result<Language> {
        let next = self.current.toggled();
        self.set(next).await?;
        Ok(next)
    }
}
