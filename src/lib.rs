pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::preferences::{FilePreferenceStore, Language, LanguagePreference};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    catalog::Catalog,
    chat::{ChatClient, ChatReply, ChatSettings, ReplySource},
    image_mapping::ImageMapping,
    preload::{HttpImageLoader, ImagePreloader, PreloadPhase, PreloadPlan},
    stats::CatalogStats,
    store::{CatalogStore, FilterAction},
};
pub use crate::domain::model::{Category, FilterState, Service, ServiceStatus, SuperCategory};
pub use crate::utils::error::{CatalogError, Result};
