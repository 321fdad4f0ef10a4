//! Gives `<a href>` tags inside raw HTML the same internal/external
//! treatment the link component applies to markdown links.

use crate::components::LinkKind;
use crate::components::link::{
    EXTERNAL_CLASS, EXTERNAL_REL, INTERNAL_CLASS, external_color, indicator_color,
};
use crate::style::Style;
use folio_core::ColorMode;
use lol_html::errors::RewritingError;
use lol_html::{RewriteStrSettings, element, rewrite_str};

/// Rewrites every `a[href]` in `html`. Existing classes are kept after the
/// link classes.
pub fn rewrite_links(html: &str, mode: ColorMode) -> Result<String, RewritingError> {
    let element_content_handlers = vec![element!("a[href]", move |el| {
        let href = el.get_attribute("href");
        let kind = LinkKind::classify(href.as_deref().filter(|href| !href.is_empty()));
        let base = match kind {
            LinkKind::Internal => INTERNAL_CLASS,
            LinkKind::External => EXTERNAL_CLASS,
        };
        let class = match el.get_attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{base} {}", existing.trim())
            }
            _ => base.to_string(),
        };
        el.set_attribute("class", &class)?;

        match kind {
            LinkKind::Internal => {
                el.set_attribute("data-internal", "")?;
                let indicator = Style::new().set("--folio-link-indicator", indicator_color(mode));
                let style = match el.get_attribute("style") {
                    Some(existing) if !existing.trim().is_empty() => {
                        format!("{};{indicator}", existing.trim().trim_end_matches(';'))
                    }
                    _ => indicator.to_string(),
                };
                el.set_attribute("style", &style)?;
            }
            LinkKind::External => {
                el.set_attribute("target", "_blank")?;
                el.set_attribute("rel", EXTERNAL_REL)?;
                if el.get_attribute("style").is_none() {
                    let style = Style::new().set("color", external_color(mode));
                    el.set_attribute("style", &style.to_string())?;
                }
            }
        }
        Ok(())
    })];

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers,
            ..RewriteStrSettings::new()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_links_are_marked() {
        let out = rewrite_links("<a href=\"/about\" class=\"x\">About</a>", ColorMode::Light).unwrap();
        assert_eq!(
            out,
            "<a href=\"/about\" class=\"folio-link folio-link--internal x\" data-internal=\"\" style=\"--folio-link-indicator:var(--chakra-colors-gray-400)\">About</a>"
        );
    }

    #[test]
    fn internal_indicator_follows_colour_mode() {
        let out = rewrite_links(
            "<a href=\"#top\" style=\"font-weight:bold;\">Top</a>",
            ColorMode::Dark,
        )
        .unwrap();
        assert!(
            out.contains("style=\"font-weight:bold;--folio-link-indicator:var(--chakra-colors-gray-600)\""),
            "{out}"
        );
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let out = rewrite_links("<p><a href=\"https://example.com\">x</a></p>", ColorMode::Dark).unwrap();
        assert!(out.contains("target=\"_blank\""));
        assert!(out.contains("rel=\"noopener noreferrer\""));
        assert!(out.contains("var(--chakra-colors-blue-200)"));
    }

    #[test]
    fn anchors_without_href_are_untouched() {
        let html = "<a name=\"top\"></a><span>text</span>";
        assert_eq!(rewrite_links(html, ColorMode::Light).unwrap(), html);
    }
}
