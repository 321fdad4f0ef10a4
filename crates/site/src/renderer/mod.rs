//! Markdown/MDX → HTML renderer that routes content nodes through the
//! component registry.

mod context;
mod jsx;
mod render;
mod types;

pub use context::Context;
pub use render::{render_element, render_node};
pub use types::{HeadingEntry, RenderedDocument, RenderedPost, Scope};

use crate::components::{ImageProvider, PlainImage};
use crate::registry::{ComponentRegistry, MDX_COMPONENTS};
use folio_core::{ColorMode, FolioError, ParseOptions, extract_frontmatter, parse_mdast};
use serde::{Deserialize, Serialize};

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Colour mode the page is drawn in.
    pub color_mode: ColorMode,
    /// Prepend an internal self-link to every heading.
    pub enable_heading_autolinks: bool,
    /// Emit `loading="lazy"` on images.
    pub enable_lazy_images: bool,
    /// Parse `<…>` as raw HTML instead of JSX and pass it through.
    ///
    /// When off, lowercase JSX still renders as HTML, but scripting tags
    /// (`script`, `iframe`, …), `on*` handlers and `javascript:` URLs are
    /// dropped.
    pub allow_raw_html: bool,
    /// Parse `$…$` and `$$…$$` math.
    pub enable_math: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Light,
            enable_heading_autolinks: true,
            enable_lazy_images: true,
            allow_raw_html: false,
            enable_math: false,
        }
    }
}

impl Options {
    /// Same options in another colour mode.
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            raw_html: self.allow_raw_html,
            math: self.enable_math,
            ..ParseOptions::mdx()
        }
    }
}

/// Renders a markdown/MDX body with the default registry and plain images.
pub fn render_markdown(input: &str, options: &Options) -> Result<RenderedDocument, FolioError> {
    render_markdown_with(input, options, &MDX_COMPONENTS, &PlainImage)
}

/// Renders a markdown/MDX body with a caller-supplied registry and image
/// provider.
pub fn render_markdown_with(
    input: &str,
    options: &Options,
    registry: &ComponentRegistry,
    images: &dyn ImageProvider,
) -> Result<RenderedDocument, FolioError> {
    render_source(input, options.parse_options(), options, registry, images)
}

fn render_source(
    input: &str,
    parse_options: ParseOptions,
    options: &Options,
    registry: &ComponentRegistry,
    images: &dyn ImageProvider,
) -> Result<RenderedDocument, FolioError> {
    let tree = parse_mdast(input, &parse_options)?;
    let mut ctx = Context::new(options, registry, images);
    render_node(&tree, &mut ctx);
    Ok(ctx.finish())
}

/// Renders a post: frontmatter plus body.
///
/// # Example
///
/// ```
/// use folio_site::{Options, render_post};
///
/// let post = render_post("---\ntitle: Hello\n---\n[home](/)\n", &Options::default()).unwrap();
/// assert_eq!(post.meta.title.as_deref(), Some("Hello"));
/// assert!(post.document.html.contains("data-internal"));
/// ```
pub fn render_post(source: &str, options: &Options) -> Result<RenderedPost, FolioError> {
    render_post_with(source, options, &MDX_COMPONENTS, &PlainImage)
}

/// [`render_post`] with a caller-supplied registry and image provider.
pub fn render_post_with(
    source: &str,
    options: &Options,
    registry: &ComponentRegistry,
    images: &dyn ImageProvider,
) -> Result<RenderedPost, FolioError> {
    let frontmatter = extract_frontmatter(source)?;
    let body = &source[frontmatter.body_start..];
    let parse_options = ParseOptions {
        frontmatter: false,
        ..options.parse_options()
    };

    let mut document = render_source(body, parse_options, options, registry, images)?;
    let skipped_lines = source[..frontmatter.body_start].matches('\n').count();
    document.diagnostics.offset_lines(skipped_lines);

    Ok(RenderedPost {
        meta: frontmatter.meta(),
        frontmatter: frontmatter.value,
        document,
    })
}
