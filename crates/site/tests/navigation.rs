use folio_core::{ColorMode, FolioError};
use folio_site::nav::{NavEntry, NavVariant, Navigation, SiteConfig, render_nav, render_variant};

const SITE_JSON: &str = r#"{
  "title": "Michael Hall",
  "navigation": [
    {"name": "Blog", "link": "/blog"},
    {"name": "Projects", "link": "/projects"},
    {"name": "stats", "link": "/stats"},
    {"name": "About", "link": "/about"},
    {"type": "dropdown", "name": "Other", "links": [
      {"name": "Music", "link": "/spotify"},
      {"name": "Bookmarks", "link": "/bookmarks"}
    ]}
  ]
}"#;

#[test]
fn json_config_matches_default_site() {
    let site = SiteConfig::from_json(SITE_JSON).unwrap();
    assert_eq!(site, SiteConfig::default());
}

#[test]
fn both_variants_reach_six_links() {
    let site = SiteConfig::default();
    let entries = site.navigation.entries();
    assert_eq!(entries.len(), 5);
    assert_eq!(
        entries
            .iter()
            .filter(|e| matches!(e, NavEntry::Dropdown(_)))
            .count(),
        1
    );

    for variant in [NavVariant::Compact, NavVariant::Full] {
        let html = render_variant(entries, variant);
        for link in site.navigation.reachable_links() {
            let href = format!("href=\"{}\"", link.link);
            assert_eq!(html.matches(&href).count(), 1, "{variant:?} {href}");
        }
        assert_eq!(html.matches("<a ").count(), 6);
        assert!(html.contains(">Other<"));
    }
}

#[test]
fn header_holds_brand_and_both_variants() {
    let html = render_nav(&SiteConfig::default(), ColorMode::Light);
    assert!(html.starts_with("<header class=\"folio-header\""));
    assert!(html.ends_with("</header>"));
    // Brand plus six links per variant.
    assert_eq!(html.matches("<a ").count(), 13);
    let compact = html.find("folio-nav--compact").unwrap();
    let full = html.find("folio-nav--full").unwrap();
    assert!(compact < full);
}

#[test]
fn labels_are_escaped() {
    let nav = Navigation::from_json(r#"[{"name": "Q&A <live>", "link": "/qa"}]"#).unwrap();
    let html = render_variant(nav.entries(), NavVariant::Full);
    assert!(html.contains(">Q&amp;A &lt;live&gt;</a>"));
}

#[test]
fn invalid_navigation_is_rejected() {
    assert!(matches!(
        Navigation::from_json("[]"),
        Err(FolioError::InvalidNavigation(_))
    ));
    assert!(matches!(
        Navigation::from_json(r#"[{"name": "Blog"}]"#),
        Err(FolioError::Config(_))
    ));
}
