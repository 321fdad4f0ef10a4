#![deny(missing_docs)]
//! folio site: MDX component registry, content renderer, navigation and page views.

/// Parallel rendering of many posts.
pub mod batch;
/// Presentational components and their props.
pub mod components;
/// HTML string building.
pub mod html;
/// Navigation model and header rendering.
pub mod nav;
/// Node kind → component registry.
pub mod registry;
/// Markdown/MDX rendering through the registry.
pub mod renderer;
/// Inline style declarations over theme tokens.
pub mod style;
/// Global stylesheet.
pub mod theme;
/// Raw HTML post-processing.
pub mod transform;
/// Work-in-progress placeholder view.
pub mod wip;

pub use batch::{BatchInput, BatchOptions, BatchOutput, BatchResult, BatchStats, render_batch};
pub use nav::{NavEntry, NavLink, Navigation, SiteConfig, render_nav};
pub use registry::{Component, ComponentRegistry, MDX_COMPONENTS, NodeKind, RegistryConfig};
pub use renderer::{
    HeadingEntry, Options, RenderedDocument, RenderedPost, render_markdown, render_markdown_with,
    render_post, render_post_with,
};
pub use theme::stylesheet;
