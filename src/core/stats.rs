use crate::core::views;
use crate::domain::model::{Category, Service, ServiceStatus, SuperCategory};
use serde::Serialize;

/// 目錄統計。每次呼叫都從完整目錄重新計算，不做快取。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub featured: usize,
    pub by_category: Vec<(Category, usize)>,
    pub by_super_category: Vec<(SuperCategory, usize)>,
}

impl CatalogStats {
    pub fn compute(services: &[Service]) -> Self {
        let by_category = views::categories(services)
            .into_iter()
            .map(|category| {
                let count = services.iter().filter(|s| s.category == category).count();
                (category, count)
            })
            .collect();

        let by_super_category = [SuperCategory::Strategy, SuperCategory::Operation]
            .into_iter()
            .map(|super_category| {
                let count = services
                    .iter()
                    .filter(|s| s.super_category == super_category)
                    .count();
                (super_category, count)
            })
            .collect();

        Self {
            total: services.len(),
            active: services
                .iter()
                .filter(|s| s.status == ServiceStatus::Active)
                .count(),
            featured: services.iter().filter(|s| s.featured).count(),
            by_category,
            by_super_category,
        }
    }

    pub fn count_for(&self, category: &Category) -> usize {
        self.by_category
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog_data::builtin_services;

    #[test]
    fn test_stats_over_builtin_catalog() {
        let services = builtin_services();
        let stats = CatalogStats::compute(&services);

        assert_eq!(stats.total, 15);
        assert_eq!(stats.active, 12);
        assert_eq!(stats.featured, 5);
        assert_eq!(stats.count_for(&Category::Automation), 4);
        assert_eq!(stats.count_for(&Category::Other("iot".to_string())), 0);

        let per_category: usize = stats.by_category.iter().map(|(_, n)| n).sum();
        assert_eq!(per_category, stats.total);
        let per_super: usize = stats.by_super_category.iter().map(|(_, n)| n).sum();
        assert_eq!(per_super, stats.total);
    }

    #[test]
    fn test_stats_on_empty_catalog() {
        let stats = CatalogStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_category.is_empty());
        assert_eq!(stats.by_super_category.len(), 2);
    }
}
