//! Link component: same-site links get the hover hash indicator, everything
//! else opens in a new tab.

use super::LinkProps;
use crate::renderer::Context;
use crate::style::{self, Style};
use folio_core::{ColorMode, RenderWarning};

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-site path or fragment, navigated client-side.
    Internal,
    /// Any other target, opened in a new browsing context.
    External,
}

impl LinkKind {
    /// Classifies an `href`. Only non-empty values starting with `/` or `#`
    /// are internal; a missing or empty `href` is external.
    ///
    /// ```
    /// use folio_site::components::LinkKind;
    ///
    /// assert_eq!(LinkKind::classify(Some("/blog")), LinkKind::Internal);
    /// assert_eq!(LinkKind::classify(Some("#setup")), LinkKind::Internal);
    /// assert_eq!(LinkKind::classify(Some("https://example.com")), LinkKind::External);
    /// assert_eq!(LinkKind::classify(None), LinkKind::External);
    /// ```
    pub fn classify(href: Option<&str>) -> Self {
        match href {
            Some(href) if href.starts_with('/') || href.starts_with('#') => LinkKind::Internal,
            _ => LinkKind::External,
        }
    }
}

/// Colour of the hover `#` on internal links.
pub fn indicator_color(mode: ColorMode) -> String {
    style::color(mode.value("gray.400", "gray.600"))
}

/// Colour of external links.
pub fn external_color(mode: ColorMode) -> String {
    style::color(mode.value("blue.600", "blue.200"))
}

/// Class list of internal links.
pub const INTERNAL_CLASS: &str = "folio-link folio-link--internal";
/// Class list of external links.
pub const EXTERNAL_CLASS: &str = "folio-link folio-link--external";
/// `rel` of external links.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Renders a link around `children`.
pub fn render(props: &LinkProps, children: &str, ctx: &mut Context) {
    let href = props.href.as_deref().filter(|href| !href.is_empty());
    if href.is_none() {
        ctx.warn(RenderWarning::MissingHref {
            location: ctx.location(),
        });
    }

    let mode = ctx.color_mode();
    ctx.push_raw("<a");
    if let Some(href) = href {
        ctx.push_attr("href", href);
    }
    if let Some(title) = &props.title {
        ctx.push_attr("title", title);
    }

    match LinkKind::classify(href) {
        LinkKind::Internal => {
            ctx.push_raw(" data-internal");
            ctx.push_attr("class", INTERNAL_CLASS);
            ctx.push_style(
                &Style::new()
                    .set("width", "calc(100% + 28px)")
                    .set("position", "absolute")
                    .set("margin-left", "-0.7em")
                    .set("height", "100%")
                    .set("max-width", "700px")
                    .set("cursor", "pointer")
                    .set("--folio-link-indicator", indicator_color(mode)),
            );
        }
        LinkKind::External => {
            ctx.push_attr("class", EXTERNAL_CLASS);
            ctx.push_attr("target", "_blank");
            ctx.push_attr("rel", EXTERNAL_REL);
            ctx.push_style(&Style::new().set("color", external_color(mode)));
        }
    }

    ctx.push_raw(">");
    ctx.push_raw(children);
    ctx.push_raw("</a>");
}
