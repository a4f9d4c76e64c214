use crate::domain::catalog_data::builtin_services;
use crate::domain::model::Service;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

/// 不可變的服務目錄，建立時保證 id 唯一
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Arc<[Service]>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Result<Self> {
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateServiceId {
                    id: service.id.clone(),
                });
            }
        }

        tracing::debug!("Catalog created with {} services", services.len());
        Ok(Self {
            services: services.into(),
        })
    }

    /// 網站內建的服務目錄
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_services())
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }
}

impl Deref for Catalog {
    type Target = [Service];

    fn deref(&self) -> &Self::Target {
        &self.services
    }
}
