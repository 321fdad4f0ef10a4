//! Heading component. One implementation serves all six levels; the level
//! it was invoked for selects the font size.

use super::TitleProps;
use crate::registry::HeadingLevel;
use crate::renderer::Context;
use crate::style::{self, Style};
use folio_core::RenderWarning;

/// Responsive font size of a heading: `base` below the `sm` breakpoint,
/// `sm` from it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSize {
    /// Size on narrow viewports.
    pub base: &'static str,
    /// Size from the `sm` breakpoint on; `None` keeps `base`.
    pub sm: Option<&'static str>,
}

impl TitleSize {
    const fn pair(base: &'static str, sm: &'static str) -> Self {
        Self { base, sm: Some(sm) }
    }

    /// Size for a heading level.
    pub fn for_level(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => Self::pair("2xl", "4xl"),
            HeadingLevel::H2 => Self::pair("xl", "2xl"),
            HeadingLevel::H3 => Self::pair("lg", "xl"),
            HeadingLevel::H4 => Self::pair("md", "lg"),
            HeadingLevel::H5 => Self::pair("sm", "md"),
            HeadingLevel::H6 => Self {
                base: "sm",
                sm: None,
            },
        }
    }

    /// Size for a heading tag (`h1`..`h6`); `None` for anything else.
    pub fn for_tag(tag: &str) -> Option<Self> {
        HeadingLevel::ALL
            .into_iter()
            .find(|level| level.tag() == tag)
            .map(Self::for_level)
    }

    /// Size for a heading depth; `None` outside 1..=6.
    pub fn for_depth(depth: u8) -> Option<Self> {
        HeadingLevel::from_depth(depth).map(Self::for_level)
    }

    /// Adds the size variables read by the `.folio-title` rules.
    fn apply(self, style: Style) -> Style {
        style
            .set("--folio-title-size", style::font_size(self.base))
            .set_opt("--folio-title-size-sm", self.sm.map(style::font_size))
    }
}

const TITLE_CLASS: &str = "folio-title line-heading";

/// Renders a heading of the level in `props`.
pub fn render(props: &TitleProps, children: &str, ctx: &mut Context) {
    render_depth(props.level.depth(), props.id.as_deref(), children, ctx);
}

/// Renders a heading for a raw depth.
///
/// A depth with no size entry is reported as
/// [`RenderWarning::UnmappedHeading`] and drawn as an ARIA heading with the
/// inherited font size.
pub fn render_depth(depth: u8, id: Option<&str>, children: &str, ctx: &mut Context) {
    let (tag, css) = match (HeadingLevel::from_depth(depth), TitleSize::for_depth(depth)) {
        (Some(level), Some(size)) => (level.tag(), size.apply(Style::new())),
        _ => {
            ctx.warn(RenderWarning::UnmappedHeading {
                depth,
                location: ctx.location(),
            });
            ("div", Style::new())
        }
    };
    let css = css.set("margin-top", style::space("5"));

    ctx.open("div", "", &Style::new().set("display", "flex"));
    ctx.push_raw("<");
    ctx.push_raw(tag);
    if tag == "div" {
        ctx.push_raw(" role=\"heading\"");
        ctx.push_attr("aria-level", &depth.to_string());
    }
    if let Some(id) = id {
        ctx.push_attr("id", id);
    }
    ctx.push_attr("class", TITLE_CLASS);
    ctx.push_style(&css);
    ctx.push_raw(">");
    ctx.push_raw(children);
    ctx.close(tag);
    ctx.close("div");
}
