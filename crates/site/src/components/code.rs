//! Code block components: the `pre` frame, `code` text and the `div` that
//! doubles as the code-title bar.

use super::BlockProps;
use crate::html::class_list;
use crate::renderer::Context;
use crate::style::{self, Style};
use folio_core::is_code_title_class;

fn classes(base: &str, props: &BlockProps) -> String {
    class_list([base, props.class_name.as_deref().unwrap_or("")])
}

/// Renders the frame around a code block.
pub fn render_pre(props: &BlockProps, children: &str, ctx: &mut Context) {
    let mode = ctx.color_mode();
    let style = Style::new()
        .set("border-radius", style::radius("lg"))
        .set("margin-top", style::space("8"))
        .set("padding", style::space("5"))
        .set("overflow", "hidden")
        .set("background", style::color(mode.value("gray.100", "gray.900")))
        .set("color", style::color(mode.value("gray.800", "gray.50")))
        .set("border", "1px solid")
        .set("border-color", style::color(mode.value("gray.300", "gray.700")));
    ctx.open("pre", &classes("folio-pre", props), &style);
    ctx.push_raw(children);
    ctx.close("pre");
}

/// Renders code text, inline or inside a `pre`.
pub fn render_code(props: &BlockProps, children: &str, ctx: &mut Context) {
    let mode = ctx.color_mode();
    let style = Style::new()
        .set("color", style::color(mode.value("gray.800", "gray.200")))
        .set("background", style::color(mode.value("gray.100", "gray.900")))
        .set("word-break", "break-word")
        .set("white-space", "pre-wrap");
    ctx.open("code", &classes("folio-code", props), &style);
    ctx.push_raw(children);
    ctx.close("code");
}

/// Renders a generic block. A block carrying the code-title class becomes
/// the tab sitting on top of the following code block.
pub fn render_div(props: &BlockProps, children: &str, ctx: &mut Context) {
    let class_name = props.class_name.as_deref().unwrap_or("");
    if !is_code_title_class(class_name) {
        ctx.open("div", class_name, &Style::new());
        ctx.push_raw(children);
        ctx.close("div");
        return;
    }

    let mode = ctx.color_mode();
    let top_radius = style::radius("xl");
    let style = Style::new()
        .set("margin-top", style::space("8"))
        .set("padding-inline", style::space("5"))
        .set("padding-block", style::space("3"))
        .set("color", style::color(mode.value("gray.800", "gray.200")))
        .set("border", "1px solid")
        .set("border-bottom", "none")
        .set("border-color", style::color(mode.value("gray.300", "gray.700")))
        .set("border-top-left-radius", top_radius.clone())
        .set("border-top-right-radius", top_radius)
        .set("background", style::color(mode.value("gray.200", "gray.700")))
        .set("font-size", style::font_size("sm"))
        .set("font-family", style::font("mono"))
        .set("font-weight", style::font_weight("bold"));
    ctx.open("div", class_name, &style);
    ctx.push_raw(children);
    ctx.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_classes_keep_extra_names() {
        let props = BlockProps {
            class_name: Some("language-rust".into()),
        };
        assert_eq!(classes("folio-code", &props), "folio-code language-rust");
        assert_eq!(classes("folio-pre", &BlockProps::default()), "folio-pre");
    }
}
