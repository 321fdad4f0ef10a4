//! Captioned image component.

use super::ImageProps;
use crate::html::{HtmlBuf, class_list};
use crate::renderer::Context;
use crate::style::{self, Style};
use folio_core::RenderWarning;

/// What the component asks the image provider to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSource<'a> {
    /// Image URL.
    pub src: &'a str,
    /// Alternative text.
    pub alt: &'a str,
    /// Intrinsic width in pixels.
    pub width: Option<u32>,
    /// Intrinsic height in pixels.
    pub height: Option<u32>,
    /// Extra classes for the `<img>`.
    pub class_name: &'a str,
    /// Defer loading until the image nears the viewport.
    pub lazy: bool,
}

/// Produces the `<img>` markup; optimisation and caching live behind this.
pub trait ImageProvider: Send + Sync {
    /// Returns the markup for one image.
    fn render(&self, image: &ImageSource<'_>) -> String;
}

/// Plain `<img>` with the given attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainImage;

impl ImageProvider for PlainImage {
    fn render(&self, image: &ImageSource<'_>) -> String {
        let mut html = HtmlBuf::new();
        html.push_raw("<img");
        html.push_attr("src", image.src);
        html.push_attr("alt", image.alt);
        if let Some(width) = image.width {
            html.push_attr("width", &width.to_string());
        }
        if let Some(height) = image.height {
            html.push_attr("height", &height.to_string());
        }
        if !image.class_name.is_empty() {
            html.push_attr("class", image.class_name);
        }
        if image.lazy {
            html.push_raw(" loading=\"lazy\" decoding=\"async\"");
        }
        html.push_raw(" />");
        html.into_string()
    }
}

impl<F> ImageProvider for F
where
    F: Fn(&ImageSource<'_>) -> String + Send + Sync,
{
    fn render(&self, image: &ImageSource<'_>) -> String {
        (self)(image)
    }
}

/// Parses an aspect ratio written as a number (`1.5`) or a quotient
/// (`16/9`). Non-positive and non-finite values are rejected.
pub fn parse_ratio(value: &str) -> Option<f64> {
    let ratio = match value.split_once('/') {
        Some((num, den)) => num.trim().parse::<f64>().ok()? / den.trim().parse::<f64>().ok()?,
        None => value.trim().parse::<f64>().ok()?,
    };
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

/// Renders the image, its optional aspect-ratio frame and the `alt` caption.
pub fn render(props: &ImageProps, ctx: &mut Context) {
    let ratio = props.ratio.as_deref().and_then(|value| {
        let parsed = parse_ratio(value);
        if parsed.is_none() {
            ctx.warn(RenderWarning::InvalidRatio {
                value: value.to_string(),
                location: ctx.location(),
            });
        }
        parsed
    });

    let img = ctx.images().render(&ImageSource {
        src: &props.src,
        alt: &props.alt,
        width: props.width,
        height: props.height,
        class_name: if props.border { "border" } else { "" },
        lazy: ctx.lazy_images_enabled(),
    });

    ctx.open(
        "div",
        "folio-image",
        &Style::new()
            .set("display", "flex")
            .set("flex-direction", "column")
            .set("margin-block", style::space("7")),
    );

    match ratio {
        Some(ratio) => {
            let width = style::size(props.chakra_width.as_deref().unwrap_or("full"));
            ctx.open(
                "div",
                "folio-aspect-ratio",
                &Style::new()
                    .set("position", "relative")
                    .set("width", width)
                    .set("margin-inline", "auto")
                    .set("aspect-ratio", ratio.to_string()),
            );
            ctx.push_raw(&img);
            ctx.close("div");
        }
        None => ctx.push_raw(&img),
    }

    let caption_color = style::color(ctx.color_mode().value("gray.600", "gray.400"));
    ctx.open(
        "p",
        &class_list(["folio-image__caption"]),
        &Style::new()
            .set("text-align", "center")
            .set("font-weight", style::font_weight("semibold"))
            .set("margin-top", style::space("2"))
            .set("color", caption_color),
    );
    ctx.push_text(&props.alt);
    ctx.close("p");
    ctx.close("div");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios() {
        assert_eq!(parse_ratio("1.5"), Some(1.5));
        assert_eq!(parse_ratio("16/9"), Some(16.0 / 9.0));
        assert_eq!(parse_ratio(" 4 / 3 "), Some(4.0 / 3.0));
        assert_eq!(parse_ratio("wide"), None);
        assert_eq!(parse_ratio("1/0"), None);
        assert_eq!(parse_ratio("0"), None);
        assert_eq!(parse_ratio("-2"), None);
    }

    #[test]
    fn plain_image_markup() {
        let html = PlainImage.render(&ImageSource {
            src: "/me.jpg",
            alt: "Me & my dog",
            width: Some(640),
            height: None,
            class_name: "border",
            lazy: true,
        });
        assert_eq!(
            html,
            "<img src=\"/me.jpg\" alt=\"Me &amp; my dog\" width=\"640\" class=\"border\" loading=\"lazy\" decoding=\"async\" />"
        );
    }

    #[test]
    fn closures_are_providers() {
        let provider = |image: &ImageSource<'_>| format!("<picture>{}</picture>", image.src);
        assert_eq!(
            ImageProvider::render(
                &provider,
                &ImageSource {
                    src: "/a.png",
                    alt: "",
                    width: None,
                    height: None,
                    class_name: "",
                    lazy: false,
                }
            ),
            "<picture>/a.png</picture>"
        );
    }
}
