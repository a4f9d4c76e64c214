use crate::core::catalog::Catalog;
use crate::core::stats::CatalogStats;
use crate::core::views;
use crate::domain::model::{Category, FilterState, Service, ServiceStatus, SuperCategory};

/// 可以送進 store 的篩選動作，每個 `Set*` 只替換一個欄位
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetCategory(Option<Category>),
    SetStatus(Option<ServiceStatus>),
    SetFeatured(Option<bool>),
    SetSearchTerm(Option<String>),
    SetTags(Option<Vec<String>>),
    Reset,
}

/// Reducer：舊狀態 + 動作 -> 新狀態，不驗證欄位內容
pub fn reduce(state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::SetCategory(category) => FilterState { category, ..state },
        FilterAction::SetStatus(status) => FilterState { status, ..state },
        FilterAction::SetFeatured(featured) => FilterState { featured, ..state },
        FilterAction::SetSearchTerm(search_term) => FilterState {
            search_term,
            ..state
        },
        FilterAction::SetTags(tags) => FilterState { tags, ..state },
        FilterAction::Reset => FilterState::default(),
    }
}

/// 目錄 store：持有篩選狀態並回答目錄查詢。
///
/// 目錄由呼叫端注入，測試可以各自建立獨立的 store。
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    state: FilterState,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
        }
    }

    pub fn with_state(catalog: Catalog, state: FilterState) -> Self {
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        tracing::debug!("Dispatching filter action: {:?}", action);
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.dispatch(FilterAction::SetCategory(category));
    }

    pub fn set_status_filter(&mut self, status: Option<ServiceStatus>) {
        self.dispatch(FilterAction::SetStatus(status));
    }

    pub fn set_featured_filter(&mut self, featured: Option<bool>) {
        self.dispatch(FilterAction::SetFeatured(featured));
    }

    pub fn set_search_term(&mut self, search_term: Option<String>) {
        self.dispatch(FilterAction::SetSearchTerm(search_term));
    }

    pub fn set_tags_filter(&mut self, tags: Option<Vec<String>>) {
        self.dispatch(FilterAction::SetTags(tags));
    }

    pub fn reset_filters(&mut self) {
        self.dispatch(FilterAction::Reset);
    }

    /// 依目前篩選狀態回傳新的服務列表，按 priority 穩定排序
    pub fn filtered_services(&self) -> Vec<Service> {
        let filtered = views::sorted_by_priority(
            self.catalog
                .iter()
                .filter(|service| self.state.accepts(service)),
        );
        tracing::debug!(
            "Filtered {} of {} services",
            filtered.len(),
            self.catalog.len()
        );
        filtered
    }

    pub fn services_by_category(&self, category: &Category) -> Vec<Service> {
        views::by_category(&self.catalog, category)
    }

    pub fn services_by_super_category(&self, super_category: SuperCategory) -> Vec<Service> {
        views::by_super_category(&self.catalog, super_category)
    }

    pub fn featured_services(&self) -> Vec<Service> {
        views::featured(&self.catalog)
    }

    pub fn active_services(&self) -> Vec<Service> {
        views::with_status(&self.catalog, ServiceStatus::Active)
    }

    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        self.catalog.get(id)
    }

    pub fn categories(&self) -> Vec<Category> {
        views::categories(&self.catalog)
    }

    pub fn tags(&self) -> Vec<String> {
        views::tags(&self.catalog)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog_data::builtin_services;

    fn builtin_store() -> CatalogStore {
        CatalogStore::new(Catalog::builtin().unwrap())
    }

    fn test_service(id: &str, priority: i32, status: ServiceStatus) -> Service {
        let mut service = builtin_services().remove(0);
        service.id = id.to_string();
        service.priority = priority;
        service.status = status;
        service
    }

    fn ids(services: &[Service]) -> Vec<&str> {
        services.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_reduce_replaces_exactly_one_field() {
        let state = FilterState {
            search_term: Some("bot".to_string()),
            ..FilterState::default()
        };

        let next = reduce(state.clone(), FilterAction::SetCategory(Some(Category::Analytics)));
        assert_eq!(next.category, Some(Category::Analytics));
        assert_eq!(next.search_term, state.search_term);
        assert_eq!(next.status, state.status);
    }

    #[test]
    fn test_default_state_sorts_active_services_stably() {
        let catalog = Catalog::new(vec![
            test_service("a", 1, ServiceStatus::Active),
            test_service("b", 2, ServiceStatus::Inactive),
            test_service("c", 1, ServiceStatus::Active),
        ])
        .unwrap();
        let store = CatalogStore::new(catalog);

        assert_eq!(ids(&store.filtered_services()), vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let mut store = builtin_store();
        store.set_category_filter(Some(Category::from("blockchain")));
        assert!(store.filtered_services().is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut store = builtin_store();
        store.set_search_term(Some("ventas".to_string()));
        assert_eq!(store.filtered_services(), store.filtered_services());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = builtin_store();
        store.set_search_term(Some("CHAT".to_string()));
        let result = store.filtered_services();
        assert!(result.iter().any(|s| s.title.contains("Chatbot")));
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        let mut service = test_service("x", 1, ServiceStatus::Active);
        service.title = "N8N".to_string();
        service.subtitle = String::new();
        service.description = String::new();
        service.tags = vec!["n8n".to_string()];
        let mut store = CatalogStore::new(Catalog::new(vec![service]).unwrap());

        // 尾端空白也是搜尋字串的一部分
        store.set_search_term(Some("n8n ".to_string()));
        assert!(store.filtered_services().is_empty());

        store.set_search_term(Some("n8n".to_string()));
        assert_eq!(ids(&store.filtered_services()), vec!["x"]);

        store.set_search_term(Some("  ".to_string()));
        assert_eq!(ids(&store.filtered_services()), vec!["x"]);
    }

    #[test]
    fn test_search_for_leads() {
        let mut store = builtin_store();
        store.set_search_term(Some("leads".to_string()));
        let result = store.filtered_services();

        assert!(result.iter().any(|s| s.id == "cazador-leads"));
        assert!(!result.iter().any(|s| s.id == "chatbot-inteligente"));
    }

    #[test]
    fn test_tags_use_or_semantics() {
        let mut store = builtin_store();
        store.set_tags_filter(Some(vec!["no-such-tag".to_string(), "voz".to_string()]));
        assert_eq!(ids(&store.filtered_services()), vec!["asistente-voz"]);
    }

    #[test]
    fn test_featured_false_selects_non_featured() {
        let mut store = builtin_store();
        store.set_featured_filter(Some(false));
        let result = store.filtered_services();
        assert!(!result.is_empty());
        assert!(result.iter().all(|s| !s.featured));

        store.set_featured_filter(Some(true));
        assert!(store.filtered_services().iter().all(|s| s.featured));

        store.set_featured_filter(None);
        assert_eq!(store.filtered_services().len(), 12);
    }

    #[test]
    fn test_clearing_status_includes_every_status() {
        let mut store = builtin_store();
        store.set_status_filter(None);
        assert_eq!(store.filtered_services().len(), 15);

        store.set_status_filter(Some(ServiceStatus::ComingSoon));
        assert_eq!(ids(&store.filtered_services()), vec!["academia-ia-directivos"]);
    }

    #[test]
    fn test_reset_restores_active_only() {
        let mut store = builtin_store();
        store.set_status_filter(Some(ServiceStatus::Deprecated));
        store.set_category_filter(Some(Category::Training));
        store.set_search_term(Some("xyz".to_string()));
        store.reset_filters();

        assert_eq!(store.state(), &FilterState::default());
        let mut expected = store.active_services();
        views::sort_by_priority(&mut expected);
        assert_eq!(store.filtered_services(), expected);
    }

    #[test]
    fn test_catalog_queries_ignore_filter_state() {
        let mut store = builtin_store();
        store.set_search_term(Some("nothing matches this".to_string()));

        assert_eq!(store.featured_services().len(), 5);
        assert_eq!(store.active_services().len(), 12);
        assert_eq!(
            ids(&store.services_by_category(&Category::Ecommerce)),
            vec!["tienda-ia", "atencion-postventa"]
        );
        assert_eq!(store.categories().len(), 6);
        assert!(store.filtered_services().is_empty());
    }
}
