use std::path::Path;

use wind_dashboard::data::DashboardData;
use wind_dashboard::page::{Block, Page, RecordingSurface, TextRole, render_page};
use wind_dashboard::{Dashboard, DashboardConfig};

#[test]
fn introduction_renders_title_byline_image_and_narrative() {
    let mut surface = RecordingSurface::new();
    let page = render_page(
        "Introduction",
        &DashboardData::default(),
        Path::new("assets"),
        &mut surface,
    )
    .expect("dispatch");

    assert_eq!(page, Some(Page::Introduction));
    let Block::Text(title) = &surface.blocks[0] else {
        panic!("first block must be the title");
    };
    assert_eq!(title.role, TextRole::Title);
    assert!(title.plain_text().starts_with("Predicting Candidate Wind Farm"));

    let images: Vec<_> = surface
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Image(image) => Some(image),
            _ => None,
        })
        .collect();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].path, Path::new("assets").join("intro-1.jpg"));

    let narrative: String = surface.texts().map(|text| text.plain_text()).collect();
    assert!(narrative.contains("What is a wind farm?"));
    assert!(narrative.contains("CO2-equivalent"));
    assert!(narrative.contains("14 April 2021"));
    assert_eq!(surface.charts().count(), 0);
}

#[test]
fn disabled_pages_render_nothing() {
    for selection in ["About the Data", "Conclusion and Recommendations", "The Team"] {
        let mut surface = RecordingSurface::new();
        let page = render_page(
            selection,
            &DashboardData::default(),
            Path::new("assets"),
            &mut surface,
        )
        .expect("dispatch");
        assert!(page.is_some(), "{selection} is a known page");
        assert!(surface.is_empty(), "{selection} must not render content");
    }
}

#[test]
fn page_blocks_depend_only_on_asset_dir() {
    let assets = Path::new("static");
    assert!(!Page::Introduction.blocks(assets).is_empty());
    for page in [Page::AboutTheData, Page::Conclusion, Page::Team] {
        assert!(page.blocks(assets).is_empty(), "{page} has no blocks");
    }
}

#[test]
fn unknown_selection_renders_nothing_without_error() {
    let mut surface = RecordingSurface::new();
    let page = render_page(
        "Pricing",
        &DashboardData::default(),
        Path::new("assets"),
        &mut surface,
    )
    .expect("unknown selection is not an error");
    assert_eq!(page, None);
    assert!(surface.is_empty());
}

#[test]
fn selection_matches_titles_case_insensitively() {
    assert_eq!(Page::from_selection("introduction"), Some(Page::Introduction));
    assert_eq!(Page::from_selection("  The Team "), Some(Page::Team));
    assert_eq!(Page::from_selection("Team"), None);
    assert!("About the Data".parse::<Page>().is_ok());
    assert!("Nope".parse::<Page>().is_err());

    let titles: Vec<&str> = Page::ALL.iter().map(|page| page.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Introduction",
            "About the Data",
            "Conclusion and Recommendations",
            "The Team"
        ]
    );
}

#[test]
fn dashboard_renders_introduction_as_html_document() {
    let config = DashboardConfig::default().with_asset_dir("static");
    let dashboard = Dashboard::new(config, DashboardData::default()).expect("dashboard");

    let html = dashboard.render_page_html("Introduction").expect("html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(
        "<title>Predicting Candidate Wind Farm Locations in the Philippines</title>"
    ));
    assert!(html.contains(r#"<img src="static/intro-1.jpg""#));
    assert!(html.contains("CO<sub>2</sub>"));
    assert!(html.contains(r#"<h1 class="title align-center">"#));

    let empty = dashboard.render_page_html("Unknown").expect("html");
    assert!(!empty.contains("<h1"));
}
