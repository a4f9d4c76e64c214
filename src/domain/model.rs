use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 服務類別。未知字串保留為 `Other`，篩選時自然不會命中任何服務。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Automation,
    AiAssistant,
    Analytics,
    Ecommerce,
    Training,
    Consulting,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Automation => "automation",
            Category::AiAssistant => "ai_assistant",
            Category::Analytics => "analytics",
            Category::Ecommerce => "ecommerce",
            Category::Training => "training",
            Category::Consulting => "consulting",
            Category::Other(value) => value,
        }
    }

    /// 顯示用標籤（西班牙文）
    pub fn label(&self) -> &str {
        match self {
            Category::Automation => "Automatización",
            Category::AiAssistant => "Asistentes IA",
            Category::Analytics => "Analítica",
            Category::Ecommerce => "E-commerce",
            Category::Training => "Formación",
            Category::Consulting => "Consultoría",
            Category::Other(value) => value,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "automation" => Category::Automation,
            "ai_assistant" => Category::AiAssistant,
            "analytics" => Category::Analytics,
            "ecommerce" => Category::Ecommerce,
            "training" => Category::Training,
            "consulting" => Category::Consulting,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuperCategory {
    Strategy,
    Operation,
}

impl SuperCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuperCategory::Strategy => "strategy",
            SuperCategory::Operation => "operation",
        }
    }
}

impl FromStr for SuperCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strategy" => Ok(SuperCategory::Strategy),
            "operation" => Ok(SuperCategory::Operation),
            other => Err(format!("unknown super category: {}", other)),
        }
    }
}

impl fmt::Display for SuperCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    #[default]
    Active,
    Inactive,
    ComingSoon,
    Deprecated,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Inactive => "inactive",
            ServiceStatus::ComingSoon => "coming_soon",
            ServiceStatus::Deprecated => "deprecated",
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "active" => Ok(ServiceStatus::Active),
            "inactive" => Ok(ServiceStatus::Inactive),
            "coming_soon" => Ok(ServiceStatus::ComingSoon),
            "deprecated" => Ok(ServiceStatus::Deprecated),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMedia {
    pub video: Option<String>,
    pub gallery: Vec<String>,
}

/// 目錄中的單一服務項目，建置時靜態定義，執行期不會被修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub delivery_time: String,
    pub category: Category,
    pub super_category: SuperCategory,
    pub priority: i32,
    pub featured: bool,
    pub status: ServiceStatus,
    pub tags: Vec<String>,
    pub color: String,
    pub gradient: String,
    pub thumbnail: String,
    pub media: Option<ServiceMedia>,
}

impl Service {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 不分大小寫的子字串搜尋：標題、副標題、描述或任一標籤
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.subtitle.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// 目錄的查詢條件。`Default` 即初始狀態：只顯示 active 服務。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: Option<Category>,
    pub status: Option<ServiceStatus>,
    pub featured: Option<bool>,
    pub search_term: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            status: Some(ServiceStatus::Active),
            featured: None,
            search_term: None,
            tags: None,
        }
    }
}

impl FilterState {
    /// 空白搜尋字串視為未設定；非空白時原樣比對，不做 trim
    pub fn effective_search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }

    pub fn effective_tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }

    pub fn accepts(&self, service: &Service) -> bool {
        if let Some(status) = self.status {
            if service.status != status {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &service.category != category {
                return false;
            }
        }

        if let Some(featured) = self.featured {
            if service.featured != featured {
                return false;
            }
        }

        if let Some(term) = self.effective_search_term() {
            if !service.matches_search(term) {
                return false;
            }
        }

        if let Some(tags) = self.effective_tags() {
            if !tags.iter().any(|tag| service.has_tag(tag)) {
                return false;
            }
        }

        true
    }
}
