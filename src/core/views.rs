//! 目錄的衍生視圖：純函式，輸入為服務切片，輸出為新的集合，不修改來源。

use crate::domain::model::{Category, Service, ServiceStatus, SuperCategory};
use std::collections::HashSet;

/// 依 priority 升冪排序（穩定排序，同優先級保留目錄順序）
pub fn sort_by_priority(services: &mut [Service]) {
    services.sort_by_key(|service| service.priority);
}

pub fn sorted_by_priority<'a, I>(services: I) -> Vec<Service>
where
    I: IntoIterator<Item = &'a Service>,
{
    let mut sorted: Vec<Service> = services.into_iter().cloned().collect();
    sort_by_priority(&mut sorted);
    sorted
}

/// 目錄中出現過的類別，依首次出現順序，不重複
pub fn categories(services: &[Service]) -> Vec<Category> {
    let mut seen = HashSet::new();
    services
        .iter()
        .map(|service| service.category.clone())
        .filter(|category| seen.insert(category.clone()))
        .collect()
}

/// 所有標籤，依首次出現順序，不重複，不排序
pub fn tags(services: &[Service]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for tag in services.iter().flat_map(|service| service.tags.iter()) {
        if seen.insert(tag.as_str()) {
            result.push(tag.clone());
        }
    }
    result
}

pub fn by_category(services: &[Service], category: &Category) -> Vec<Service> {
    services
        .iter()
        .filter(|service| &service.category == category)
        .cloned()
        .collect()
}

pub fn featured(services: &[Service]) -> Vec<Service> {
    services
        .iter()
        .filter(|service| service.featured)
        .cloned()
        .collect()
}

pub fn with_status(services: &[Service], status: ServiceStatus) -> Vec<Service> {
    services
        .iter()
        .filter(|service| service.status == status)
        .cloned()
        .collect()
}

/// 頂層導覽分頁用：依 super category 篩選並按優先級排序
pub fn by_super_category(services: &[Service], super_category: SuperCategory) -> Vec<Service> {
    sorted_by_priority(
        services
            .iter()
            .filter(|service| service.super_category == super_category),
    )
}

/// 同類別的其他 active 服務，按優先級排序後取前 `limit` 個
pub fn related(services: &[Service], service: &Service, limit: usize) -> Vec<Service> {
    let mut related = sorted_by_priority(services.iter().filter(|candidate| {
        candidate.id != service.id
            && candidate.category == service.category
            && candidate.status == ServiceStatus::Active
    }));
    related.truncate(limit);
    related
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog_data::builtin_services;

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let services = builtin_services();
        let categories = categories(&services);

        assert_eq!(
            categories,
            vec![
                Category::AiAssistant,
                Category::Automation,
                Category::Analytics,
                Category::Ecommerce,
                Category::Training,
                Category::Consulting,
            ]
        );
    }

    #[test]
    fn test_tags_have_no_duplicates() {
        let services = builtin_services();
        let tags = tags(&services);

        let unique: HashSet<&String> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
        assert_eq!(tags[0], "chatbot");
        // "ventas" 出現在兩個服務中，這裡只會出現一次
        assert_eq!(tags.iter().filter(|t| t.as_str() == "ventas").count(), 1);
    }

    #[test]
    fn test_by_super_category_is_priority_sorted() {
        let services = builtin_services();
        let strategy = by_super_category(&services, SuperCategory::Strategy);

        assert!(strategy
            .iter()
            .all(|s| s.super_category == SuperCategory::Strategy));
        assert_eq!(strategy[0].id, "consultoria-estrategica");
        assert!(strategy.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    #[test]
    fn test_related_excludes_self_and_inactive() {
        let services = builtin_services();
        let chatbot = services.iter().find(|s| s.id == "chatbot-inteligente").unwrap();
        let related = related(&services, chatbot, 5);

        let ids: Vec<&str> = related.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["asistente-voz"]);
    }
}
