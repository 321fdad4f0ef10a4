//! Header markup: brand link plus the compact and full navigation variants.
//!
//! Both variants are always emitted; the stylesheet shows one per viewport.

use super::types::{NavEntry, NavLink, SiteConfig};
use crate::components::LinkKind;
use crate::components::link::EXTERNAL_REL;
use crate::html::HtmlBuf;
use crate::style::{self, Style};
use folio_core::ColorMode;

/// Which rendering of the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// Menu button with nested lists, for narrow viewports.
    Compact,
    /// Inline links with dropdown menus.
    Full,
}

impl NavVariant {
    /// Class list of the variant's container.
    pub fn class(self) -> &'static str {
        match self {
            NavVariant::Compact => "folio-nav folio-nav--compact",
            NavVariant::Full => "folio-nav folio-nav--full",
        }
    }
}

/// Renders the site header.
pub fn render_nav(site: &SiteConfig, mode: ColorMode) -> String {
    let mut html = HtmlBuf::with_capacity(2048);
    html.open(
        "header",
        "folio-header",
        &Style::new()
            .set("width", "100%")
            .set("position", "absolute")
            .set("top", "0")
            .set("left", "0")
            .set("z-index", "10"),
    );
    html.open(
        "nav",
        "",
        &Style::new()
            .set("margin-inline", "auto")
            .set("padding", style::space("3")),
    );
    html.open(
        "div",
        "",
        &Style::new()
            .set("display", "flex")
            .set("margin", "auto")
            .set("justify-content", "space-between")
            .set("align-content", "center")
            .set("max-width", style::size("7xl"))
            .set("width", "100%"),
    );

    html.open(
        "div",
        "",
        &Style::new()
            .set("display", "flex")
            .set("align-content", "center"),
    );
    render_brand(&site.title, mode, &mut html);
    html.close("div");

    for variant in [NavVariant::Compact, NavVariant::Full] {
        html.push_raw(&render_variant(site.navigation.entries(), variant));
    }

    html.close("div");
    html.close("nav");
    html.close("header");
    html.into_string()
}

fn render_brand(title: &str, mode: ColorMode, html: &mut HtmlBuf) {
    html.push_raw("<a href=\"/\" data-internal");
    html.push_attr("class", "folio-brand");
    html.push_style(
        &Style::new()
            .set("font-size", style::font_size("lg"))
            .set("margin", "auto")
            .set("font-weight", style::font_weight("semibold"))
            .set("position", "relative")
            .set("text-transform", "capitalize")
            .set(
                "--folio-brand-highlight",
                style::color(mode.value("brand.200", "gray.600")),
            )
            .set(
                "--folio-brand-hover",
                style::color(mode.value("gray.900", "brand.primary")),
            ),
    );
    html.push_raw(">");
    html.push_text(title);
    html.close("a");
}

/// Renders one variant over `entries`.
pub fn render_variant(entries: &[NavEntry], variant: NavVariant) -> String {
    let mut html = HtmlBuf::new();
    html.open("div", variant.class(), &Style::new());
    match variant {
        NavVariant::Compact => {
            html.push_raw("<details class=\"folio-menu\"><summary aria-label=\"Open menu\">Menu</summary>");
            html.open("ul", "folio-menu__list", &Style::new());
            for entry in entries {
                html.push_raw("<li>");
                match entry {
                    NavEntry::Link(link) => push_link(link, &mut html),
                    NavEntry::Dropdown(group) => {
                        html.open("span", "folio-menu__label", &Style::new());
                        html.push_text(&group.name);
                        html.close("span");
                        push_link_list(&group.links, "folio-menu__group", &mut html);
                    }
                }
                html.push_raw("</li>");
            }
            html.close("ul");
            html.push_raw("</details>");
        }
        NavVariant::Full => {
            html.open(
                "ul",
                "folio-nav__list",
                &Style::new()
                    .set("display", "flex")
                    .set("gap", style::space("4"))
                    .set("align-items", "center"),
            );
            for entry in entries {
                html.push_raw("<li>");
                match entry {
                    NavEntry::Link(link) => push_link(link, &mut html),
                    NavEntry::Dropdown(group) => {
                        html.push_raw("<details class=\"folio-dropdown\"><summary>");
                        html.push_text(&group.name);
                        html.push_raw("</summary>");
                        push_link_list(&group.links, "folio-dropdown__menu", &mut html);
                        html.push_raw("</details>");
                    }
                }
                html.push_raw("</li>");
            }
            html.close("ul");
        }
    }
    html.close("div");
    html.into_string()
}

fn push_link_list(links: &[NavLink], class: &str, html: &mut HtmlBuf) {
    html.open("ul", class, &Style::new());
    for link in links {
        html.push_raw("<li>");
        push_link(link, html);
        html.push_raw("</li>");
    }
    html.close("ul");
}

fn push_link(link: &NavLink, html: &mut HtmlBuf) {
    html.push_raw("<a");
    html.push_attr("href", &link.link);
    html.push_attr("class", "folio-nav__link");
    match LinkKind::classify(Some(&link.link)) {
        LinkKind::Internal => html.push_raw(" data-internal"),
        LinkKind::External => {
            html.push_attr("target", "_blank");
            html.push_attr("rel", EXTERNAL_REL);
        }
    }
    html.push_raw(">");
    html.push_text(&link.name);
    html.close("a");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavDropdown, Navigation};

    #[test]
    fn variants_expose_every_leaf() {
        let site = SiteConfig::default();
        for variant in [NavVariant::Compact, NavVariant::Full] {
            let html = render_variant(site.navigation.entries(), variant);
            assert_eq!(html.matches("<a ").count(), 6, "{variant:?}");
            assert_eq!(html.matches("data-internal").count(), 6, "{variant:?}");
        }
    }

    #[test]
    fn dropdown_label_is_not_a_link() {
        let nav = Navigation::new(vec![
            NavDropdown::new("Other", vec![NavLink::new("Music", "/spotify")]).into(),
        ])
        .unwrap();
        let html = render_variant(nav.entries(), NavVariant::Full);
        insta::assert_snapshot!(html, @r#"<div class="folio-nav folio-nav--full"><ul class="folio-nav__list" style="display:flex;gap:var(--chakra-space-4);align-items:center"><li><details class="folio-dropdown"><summary>Other</summary><ul class="folio-dropdown__menu"><li><a href="/spotify" class="folio-nav__link" data-internal>Music</a></li></ul></details></li></ul></div>"#);
    }

    #[test]
    fn external_entries_open_in_new_tab() {
        let nav = Navigation::new(vec![NavLink::new("GitHub", "https://github.com").into()]).unwrap();
        let html = render_variant(nav.entries(), NavVariant::Compact);
        assert!(html.contains("target=\"_blank\""));
        assert!(!html.contains("data-internal"));
    }

    #[test]
    fn header_brand_follows_mode() {
        let site = SiteConfig::default();
        let light = render_nav(&site, ColorMode::Light);
        let dark = render_nav(&site, ColorMode::Dark);
        assert!(light.contains(">Michael Hall</a>"));
        assert!(light.contains("--folio-brand-highlight:var(--chakra-colors-brand-200)"));
        assert!(dark.contains("--folio-brand-hover:var(--chakra-colors-brand-primary)"));
        assert!(light.contains("folio-nav--compact") && light.contains("folio-nav--full"));
    }
}
