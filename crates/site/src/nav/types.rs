//! Navigation data: links, the dropdown group and the site configuration.

use folio_core::FolioError;
use serde::{Deserialize, Serialize};

/// A leaf navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible label.
    pub name: String,
    /// Target path or URL.
    pub link: String,
}

impl NavLink {
    /// Creates a link entry.
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Discriminator of [`NavDropdown`], written `"type": "dropdown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownType {
    /// The only group kind.
    #[default]
    Dropdown,
}

/// A labelled group of leaf links. Groups never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDropdown {
    /// Always [`DropdownType::Dropdown`].
    #[serde(rename = "type")]
    pub kind: DropdownType,
    /// Group label.
    pub name: String,
    /// Members of the group, in display order.
    pub links: Vec<NavLink>,
}

impl NavDropdown {
    /// Creates a dropdown group.
    pub fn new(name: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            kind: DropdownType::Dropdown,
            name: name.into(),
            links,
        }
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Expandable group; tried first because its `type` field is required.
    Dropdown(NavDropdown),
    /// Plain link.
    Link(NavLink),
}

impl NavEntry {
    /// Label of the entry.
    pub fn name(&self) -> &str {
        match self {
            NavEntry::Dropdown(dropdown) => &dropdown.name,
            NavEntry::Link(link) => &link.name,
        }
    }

    /// Leaf links under this entry: itself, or the group members.
    pub fn links(&self) -> &[NavLink] {
        match self {
            NavEntry::Dropdown(dropdown) => &dropdown.links,
            NavEntry::Link(link) => std::slice::from_ref(link),
        }
    }
}

impl From<NavLink> for NavEntry {
    fn from(link: NavLink) -> Self {
        NavEntry::Link(link)
    }
}

impl From<NavDropdown> for NavEntry {
    fn from(dropdown: NavDropdown) -> Self {
        NavEntry::Dropdown(dropdown)
    }
}

/// Ordered, non-empty list of navigation entries whose groups are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavEntry>", into = "Vec<NavEntry>")]
pub struct Navigation {
    entries: Vec<NavEntry>,
}

impl Navigation {
    /// Validates and wraps `entries`.
    ///
    /// ```
    /// use folio_site::nav::{NavDropdown, NavLink, Navigation};
    ///
    /// assert!(Navigation::new(vec![NavLink::new("Blog", "/blog").into()]).is_ok());
    /// assert!(Navigation::new(vec![]).is_err());
    /// assert!(Navigation::new(vec![NavDropdown::new("Other", vec![]).into()]).is_err());
    /// ```
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, FolioError> {
        if entries.is_empty() {
            return Err(FolioError::InvalidNavigation(
                "navigation has no entries".to_string(),
            ));
        }
        if let Some(empty) = entries
            .iter()
            .find(|entry| matches!(entry, NavEntry::Dropdown(d) if d.links.is_empty()))
        {
            return Err(FolioError::InvalidNavigation(format!(
                "dropdown '{}' has no links",
                empty.name()
            )));
        }
        Ok(Self { entries })
    }

    /// Parses and validates a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let entries: Vec<NavEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Every leaf link, groups flattened in place.
    pub fn reachable_links(&self) -> Vec<&NavLink> {
        self.entries.iter().flat_map(NavEntry::links).collect()
    }
}

impl TryFrom<Vec<NavEntry>> for Navigation {
    type Error = FolioError;

    fn try_from(entries: Vec<NavEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Navigation> for Vec<NavEntry> {
    fn from(navigation: Navigation) -> Self {
        navigation.entries
    }
}

/// Site-wide settings shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand text linking to `/`.
    pub title: String,
    /// Header navigation.
    pub navigation: Navigation,
}

impl SiteConfig {
    /// Parses a site configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let entries = vec![
            NavLink::new("Blog", "/blog").into(),
            NavLink::new("Projects", "/projects").into(),
            NavLink::new("stats", "/stats").into(),
            NavLink::new("About", "/about").into(),
            NavDropdown::new(
                "Other",
                vec![
                    NavLink::new("Music", "/spotify"),
                    NavLink::new("Bookmarks", "/bookmarks"),
                ],
            )
            .into(),
        ];
        Self {
            title: "Michael Hall".to_string(),
            navigation: Navigation { entries },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Blog", "link": "/blog"},
        {"type": "dropdown", "name": "Other", "links": [{"name": "Music", "link": "/spotify"}]}
    ]"#;

    #[test]
    fn parses_links_and_dropdowns() {
        let nav = Navigation::from_json(SAMPLE).unwrap();
        assert_eq!(nav.entries().len(), 2);
        assert!(matches!(&nav.entries()[0], NavEntry::Link(l) if l.link == "/blog"));
        assert!(matches!(&nav.entries()[1], NavEntry::Dropdown(d) if d.links.len() == 1));
    }

    #[test]
    fn rejects_empty_dropdown_during_deserialization() {
        let err = Navigation::from_json(r#"[{"type": "dropdown", "name": "Other", "links": []}]"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidNavigation(_)));

        let err = serde_json::from_str::<SiteConfig>(r#"{"title": "t", "navigation": []}"#)
            .unwrap_err();
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn unknown_type_is_not_a_dropdown() {
        let err = Navigation::from_json(r#"[{"type": "mega", "name": "Other", "links": []}]"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn default_site_reaches_six_links() {
        let site = SiteConfig::default();
        let links: Vec<_> = site
            .navigation
            .reachable_links()
            .into_iter()
            .map(|l| l.link.as_str())
            .collect();
        assert_eq!(
            links,
            ["/blog", "/projects", "/stats", "/about", "/spotify", "/bookmarks"]
        );
    }

    #[test]
    fn serializes_in_the_input_shape() {
        let site = SiteConfig::default();
        let json = serde_json::to_string(&site.navigation.entries()[4]).unwrap();
        insta::assert_snapshot!(json, @r#"{"type":"dropdown","name":"Other","links":[{"name":"Music","link":"/spotify"},{"name":"Bookmarks","link":"/bookmarks"}]}"#);
    }
}
