use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub width: u32,
    pub format: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub variants: Vec<ImageVariant>,
}

/// 原始圖片路徑 -> 最佳化版本列表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageMapping {
    entries: HashMap<String, ImageEntry>,
}

impl ImageMapping {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content)
    }

    pub async fn from_url(client: &Client, url: &str) -> Result<Self> {
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::ImageLoadError {
                url: url.to_string(),
                message: format!("mapping request returned HTTP {}", response.status()),
            });
        }
        Ok(response.json().await?)
    }

    /// 載入對照表；找不到或格式錯誤時回傳空表（之後一律使用原始路徑）
    pub async fn load_or_empty(client: &Client, source: &str) -> Self {
        let result = if source.starts_with("http://") || source.starts_with("https://") {
            Self::from_url(client, source).await
        } else {
            Self::from_file(source).await
        };

        match result {
            Ok(mapping) => {
                tracing::debug!("Loaded image mapping with {} entries", mapping.len());
                mapping
            }
            Err(e) => {
                tracing::warn!("⚠️ Image mapping unavailable ({}), using original paths", e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn variants(&self, original: &str) -> &[ImageVariant] {
        self.entries
            .get(original)
            .map(|entry| entry.variants.as_slice())
            .unwrap_or(&[])
    }

    /// 依可接受格式的優先順序挑選：夠寬的最小版本，否則最寬的版本。
    /// 沒有任何可用版本時回傳原始路徑。
    pub fn best_source<'a>(
        &'a self,
        original: &'a str,
        target_width: u32,
        accepted_formats: &[&str],
    ) -> &'a str {
        let variants = self.variants(original);

        for format in accepted_formats {
            let candidates: Vec<&ImageVariant> = variants
                .iter()
                .filter(|v| v.format.eq_ignore_ascii_case(format))
                .collect();

            let wide_enough = candidates
                .iter()
                .filter(|v| v.width >= target_width)
                .min_by_key(|v| v.width);
            let chosen: Option<&'a ImageVariant> = wide_enough
                .or_else(|| candidates.iter().max_by_key(|v| v.width))
                .copied();

            if let Some(variant) = chosen {
                return &variant.path;
            }
        }

        original
    }
}
