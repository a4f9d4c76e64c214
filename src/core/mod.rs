pub mod catalog;
pub mod chat;
pub mod image_mapping;
pub mod preload;
pub mod stats;
pub mod store;
pub mod views;

pub use crate::domain::model::{Category, FilterState, Service, ServiceStatus, SuperCategory};
pub use crate::domain::ports::{ImageLoader, PreferenceStore};
pub use crate::utils::error::Result;
