//! Text-level components and the small layout helpers exposed to MDX.

use super::{CheckboxProps, PaddingProps, StackProps};
use crate::renderer::Context;
use crate::style::{self, Style};

/// Body paragraph.
pub fn render_paragraph(children: &str, ctx: &mut Context) {
    ctx.open(
        "p",
        "folio-text",
        &Style::new()
            .set("font-size", style::font_size("md"))
            .set("margin-top", style::space("3")),
    );
    ctx.push_raw(children);
    ctx.close("p");
}

/// Bulleted list.
pub fn render_unordered_list(children: &str, ctx: &mut Context) {
    ctx.open(
        "ul",
        "folio-list",
        &Style::new()
            .set("margin-top", style::space("3"))
            .set("--folio-list-spacing", "4px"),
    );
    ctx.push_raw(children);
    ctx.close("ul");
}

/// List item: brand-coloured marker, neutral text.
pub fn render_list_item(children: &str, ctx: &mut Context) {
    let mode = ctx.color_mode();
    ctx.open(
        "li",
        "folio-list-item",
        &Style::new().set("color", style::color(mode.value("brand.500", "brand.300"))),
    );
    ctx.open(
        "span",
        "",
        &Style::new().set("color", style::color(mode.value("black", "white"))),
    );
    ctx.push_raw(children);
    ctx.close("span");
    ctx.close("li");
}

/// Checkbox with its label.
pub fn render_checkbox(props: &CheckboxProps, children: &str, ctx: &mut Context) {
    ctx.push_raw("<label class=\"folio-checkbox\"><input type=\"checkbox\"");
    if props.checked {
        ctx.push_raw(" checked");
    }
    if props.disabled {
        ctx.push_raw(" disabled");
    }
    ctx.push_raw(" /><span>");
    ctx.push_raw(children);
    ctx.push_raw("</span></label>");
}

/// Centred vertical stack.
pub fn render_vstack(props: &StackProps, children: &str, ctx: &mut Context) {
    let gap = style::space(props.spacing.as_deref().unwrap_or("2"));
    ctx.open(
        "div",
        "folio-vstack",
        &Style::new()
            .set("display", "flex")
            .set("flex-direction", "column")
            .set("align-items", "center")
            .set("gap", gap),
    );
    ctx.push_raw(children);
    ctx.close("div");
}

/// Full-width spacer.
pub fn render_padding(props: &PaddingProps, children: &str, ctx: &mut Context) {
    let height = style::size(props.height.as_deref().unwrap_or("1px"));
    ctx.open(
        "div",
        "folio-padding",
        &Style::new().set("width", "100%").set("height", height),
    );
    ctx.push_raw(children);
    ctx.close("div");
}

/// Writes the name of the mode opposite to the active one.
pub fn render_text_color_mode(ctx: &mut Context) {
    let name = ctx.color_mode().text_color_mode();
    ctx.push_text(name);
}
