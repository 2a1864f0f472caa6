use std::sync::Arc;

use aware_core::model::{BlogCategory, CourseLevel, Filter};
use content::StaticContent;
use services::CatalogService;

fn catalog() -> CatalogService {
    CatalogService::new(Arc::new(StaticContent::load().unwrap()))
}

#[test]
fn password_query_matches_title_description_or_topics_in_order() {
    let catalog = catalog();
    let expected: Vec<_> = catalog
        .courses()
        .iter()
        .filter(|c| {
            c.title().to_lowercase().contains("password")
                || c.description().to_lowercase().contains("password")
                || c.topics().iter().any(|t| t.to_lowercase().contains("password"))
        })
        .map(|c| c.id().clone())
        .collect();

    let found: Vec<_> = catalog
        .search_courses("PassWord", &Filter::All)
        .into_iter()
        .map(|c| c.id().clone())
        .collect();

    assert!(!found.is_empty());
    assert_eq!(found, expected);
}

#[test]
fn query_and_facet_must_both_match() {
    let catalog = catalog();
    let advanced = catalog.search_courses("password", &Filter::Only(CourseLevel::Advanced));
    assert!(advanced.iter().all(|c| c.level() == CourseLevel::Advanced));

    let alerts = catalog.search_posts("scam", &Filter::Only(BlogCategory::Alert));
    assert!(alerts.iter().all(|p| p.category() == BlogCategory::Alert));
    assert!(
        alerts
            .iter()
            .all(|p| format!("{} {}", p.title(), p.excerpt()).to_lowercase().contains("scam"))
    );
}

#[test]
fn filter_parses_from_user_input() {
    let level: Filter<CourseLevel> = "ALL".parse().unwrap();
    assert_eq!(level, Filter::All);
    let level: Filter<CourseLevel> = "beginner".parse().unwrap();
    assert_eq!(level, Filter::Only(CourseLevel::Beginner));
    assert!("expert".parse::<Filter<CourseLevel>>().is_err());
}
