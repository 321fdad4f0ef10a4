//! Placeholder page for sections that are not written yet.

use crate::html::HtmlBuf;
use crate::style::{self, Style};

/// Heading of the placeholder.
pub const WIP_HEADING: &str = "This page is currently a work in progress";
/// Line under the heading.
pub const WIP_MESSAGE: &str = "Check back later :)";

/// Renders the full-height centred placeholder.
pub fn render() -> String {
    let mut html = HtmlBuf::with_capacity(512);
    html.open(
        "div",
        "folio-wip",
        &Style::new()
            .set("display", "flex")
            .set("flex-direction", "column")
            .set("justify-content", "center")
            .set("align-items", "center")
            .set("height", "100vh")
            .set("width", "100%"),
    );
    html.open(
        "h2",
        "",
        &Style::new()
            .set("font-size", style::font_size("3xl"))
            .set("font-weight", style::font_weight("bold")),
    );
    html.push_text(WIP_HEADING);
    html.close("h2");
    html.open(
        "p",
        "",
        &Style::new().set("color", style::color("gray.500")),
    );
    html.push_text(WIP_MESSAGE);
    html.close("p");
    html.close("div");
    html.into_string()
}
