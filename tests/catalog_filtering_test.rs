use ai4u_catalog::core::views;
use ai4u_catalog::{
    Catalog, CatalogStore, Category, FilterAction, FilterState, ServiceStatus, SuperCategory,
};
use anyhow::Result;
use std::collections::HashSet;

fn store() -> Result<CatalogStore> {
    Ok(CatalogStore::new(Catalog::builtin()?))
}

fn ids(store: &CatalogStore) -> Vec<String> {
    store
        .filtered_services()
        .into_iter()
        .map(|service| service.id)
        .collect()
}

/// 預設狀態：只有 active，依優先級排序，同優先級保留目錄順序
#[test]
fn test_default_listing_is_active_and_priority_ordered() -> Result<()> {
    let store = store()?;
    let services = store.filtered_services();

    assert_eq!(services.len(), 12);
    assert!(services.iter().all(|s| s.status == ServiceStatus::Active));
    assert_eq!(
        &ids(&store)[..3],
        &["chatbot-inteligente", "cazador-leads", "consultoria-estrategica"]
    );

    // 穩定排序：同優先級的服務保持目錄中的相對順序
    let catalog_position = |id: &str| store.catalog().iter().position(|s| s.id == id).unwrap();
    for pair in services.windows(2) {
        assert!(pair[0].priority <= pair[1].priority);
        if pair[0].priority == pair[1].priority {
            assert!(catalog_position(&pair[0].id) < catalog_position(&pair[1].id));
        }
    }
    Ok(())
}

#[test]
fn test_independent_stores_do_not_share_state() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut first = CatalogStore::new(catalog.clone());
    let second = CatalogStore::new(catalog);

    first.set_category_filter(Some(Category::Training));
    assert_eq!(first.filtered_services().len(), 1);
    assert_eq!(second.filtered_services().len(), 12);
    assert_eq!(second.state(), &FilterState::default());
    Ok(())
}

#[test]
fn test_combined_filters_are_anded() -> Result<()> {
    let mut store = store()?;
    store.dispatch(FilterAction::SetCategory(Some(Category::Automation)));
    store.dispatch(FilterAction::SetFeatured(Some(true)));

    assert_eq!(ids(&store), vec!["cazador-leads", "automatizacion-procesos"]);

    store.dispatch(FilterAction::SetSearchTerm(Some("N8N".to_string())));
    assert_eq!(ids(&store), vec!["automatizacion-procesos"]);

    store.dispatch(FilterAction::SetTags(Some(vec!["leads".to_string()])));
    assert!(ids(&store).is_empty());
    Ok(())
}

#[test]
fn test_search_matches_subtitle_and_description() -> Result<()> {
    let mut store = store()?;

    store.set_search_term(Some("whatsapp".to_string()));
    assert_eq!(ids(&store), vec!["chatbot-inteligente"]);

    store.set_search_term(Some("INVENTARIO".to_string()));
    assert_eq!(ids(&store), vec!["prediccion-ventas"]);
    Ok(())
}

#[test]
fn test_reset_after_arbitrary_filters() -> Result<()> {
    let mut store = store()?;
    let expected = ids(&store);

    store.set_status_filter(None);
    store.set_featured_filter(Some(false));
    store.set_tags_filter(Some(vec!["ocr".to_string()]));
    assert_eq!(ids(&store), vec!["agente-documentos"]);

    store.reset_filters();
    assert_eq!(ids(&store), expected);
    Ok(())
}

#[test]
fn test_views_have_no_duplicates() -> Result<()> {
    let store = store()?;

    let categories = store.categories();
    let unique: HashSet<&Category> = categories.iter().collect();
    assert_eq!(unique.len(), categories.len());

    let tags = store.tags();
    let unique: HashSet<&String> = tags.iter().collect();
    assert_eq!(unique.len(), tags.len());
    Ok(())
}

#[test]
fn test_super_category_tabs_cover_catalog() -> Result<()> {
    let store = store()?;
    let strategy = store.services_by_super_category(SuperCategory::Strategy);
    let operation = store.services_by_super_category(SuperCategory::Operation);

    assert_eq!(strategy.len() + operation.len(), store.catalog().len());
    assert_eq!(operation[0].id, "chatbot-inteligente");
    Ok(())
}

#[test]
fn test_stats_match_views() -> Result<()> {
    let store = store()?;
    let stats = store.stats();

    assert_eq!(stats.active, store.active_services().len());
    assert_eq!(stats.featured, store.featured_services().len());
    for category in store.categories() {
        assert_eq!(
            stats.count_for(&category),
            views::by_category(store.catalog(), &category).len()
        );
    }
    Ok(())
}

#[test]
fn test_service_lookup() -> Result<()> {
    let store = store()?;
    let service = store.service_by_id("dashboard-analitica").unwrap();
    assert_eq!(service.category, Category::Analytics);
    assert!(store.service_by_id("unknown").is_none());
    Ok(())
}
