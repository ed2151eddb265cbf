use shadesblue_core::{Catalog, ListQuery, ProjectSource, SourceFilter};

fn slugs(query: &ListQuery) -> Vec<&'static str> {
    Catalog::embedded()
        .list(query)
        .into_iter()
        .map(|p| p.slug.as_str())
        .collect()
}

#[test]
fn embedded_catalog_loads() {
    let catalog = Catalog::embedded();
    assert_eq!(catalog.len(), 8);
    assert!(catalog.get("ccte").is_some());
    assert!(catalog.get("missing").is_none());
}

#[test]
fn featured_and_priority_lead_then_alphabetical() {
    assert_eq!(
        slugs(&ListQuery::default()),
        vec![
            "afterschool-memphis",
            "mscs-district-template",
            "leaderboard-cms",
            "accessibility-menu",
            "ccte",
            "hr-website",
            "newsroom",
            "teacher-leadership",
        ]
    );
}

#[test]
fn employment_search_for_map() {
    let query = ListQuery::from_query_string("source=employment&q=map");
    assert_eq!(query.source, SourceFilter::Only(ProjectSource::Employment));
    let results = Catalog::embedded().list(&query);
    assert!(!results.is_empty());
    for project in &results {
        assert_eq!(project.source, Some(ProjectSource::Employment));
        let hay = format!("{} {} {}", project.title, project.summary, project.tags.join(" "))
            .to_lowercase();
        assert!(hay.contains("map"));
    }
    assert_eq!(slugs(&query), vec!["afterschool-memphis"]);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let upper = slugs(&ListQuery::default().with_search("  DIRECTORY "));
    assert_eq!(upper, vec!["afterschool-memphis", "ccte"]);
}

#[test]
fn unknown_params_fall_back() {
    let query = ListQuery::from_query_string("source=freelance&page=2");
    assert_eq!(query, ListQuery::default());
    assert!(slugs(&ListQuery::default().with_source(SourceFilter::Only(ProjectSource::Client))).is_empty());
}

#[test]
fn detail_slides_use_screenshot_alt_text() {
    let project = Catalog::embedded().get("mscs-district-template").unwrap();
    let slides = project.slides();
    assert_eq!(slides.len(), 3);
    assert_eq!(slides[2].alt, "MSCS District Website — screenshot 3");
}
