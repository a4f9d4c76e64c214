use crate::core::store::FilterAction;
use crate::domain::model::{Category, ServiceStatus, SuperCategory};
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// List services matching the given filters (active only by default)
    List(ListArgs),

    /// Show one service in detail
    Show {
        id: String,
    },

    /// List the distinct service categories
    Categories,

    /// List the distinct service tags
    Tags,

    /// Show catalog statistics
    Stats,

    /// Send a message to the chat webhook
    Chat {
        message: String,
    },

    /// Preload catalog and configured images in critical/important/background order
    Preload {
        /// Base URL used to resolve relative image paths
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show or change the UI language preference (es, en or toggle)
    Lang {
        value: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct ListArgs {
    /// Category filter (automation, ai_assistant, analytics, ecommerce, training, consulting)
    #[arg(long)]
    pub category: Option<String>,

    /// Status filter (active, inactive, coming_soon, deprecated)
    #[arg(long, conflicts_with = "all")]
    pub status: Option<ServiceStatus>,

    /// Include services of every status
    #[arg(long)]
    pub all: bool,

    /// Only featured (true) or only non-featured (false) services
    #[arg(long)]
    pub featured: Option<bool>,

    /// Case-insensitive search over title, subtitle, description and tags
    #[arg(long, short)]
    pub search: Option<String>,

    /// Tags to match, any of them (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Restrict to one top-level tab (strategy or operation)
    #[arg(long)]
    pub super_category: Option<SuperCategory>,

    /// Print services as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// 把命令列參數轉成 store 動作，只產生有設定的欄位
    pub fn to_actions(&self) -> Vec<FilterAction> {
        let mut actions = Vec::new();

        if let Some(category) = &self.category {
            actions.push(FilterAction::SetCategory(Some(Category::from(
                category.as_str(),
            ))));
        }

        if self.all {
            actions.push(FilterAction::SetStatus(None));
        } else if let Some(status) = self.status {
            actions.push(FilterAction::SetStatus(Some(status)));
        }

        if let Some(featured) = self.featured {
            actions.push(FilterAction::SetFeatured(Some(featured)));
        }

        if let Some(search) = &self.search {
            actions.push(FilterAction::SetSearchTerm(Some(search.clone())));
        }

        if !self.tags.is_empty() {
            let tags = self.tags.iter().map(|t| t.trim().to_lowercase()).collect();
            actions.push(FilterAction::SetTags(Some(tags)));
        }

        actions
    }
}
