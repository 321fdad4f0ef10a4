#![deny(missing_docs)]
//! folio core: markdown parsing, frontmatter, slugs, colour mode and render diagnostics.

/// Code-title annotations on fenced code blocks.
pub mod code_title;
/// Light/dark colour mode.
pub mod color_mode;
/// Error and diagnostic types.
pub mod error;
/// YAML frontmatter extraction.
pub mod frontmatter;
/// Markdown/MDX parsing.
pub mod parse;
/// Heading slug generation.
pub mod slug;

pub use code_title::{CODE_TITLE_CLASS, CodeTitle, is_code_title_class, split_code_title};
pub use color_mode::ColorMode;
pub use error::{FolioError, RenderDiagnostics, RenderWarning, SourceLocation};
pub use frontmatter::{Frontmatter, FrontmatterError, PostMeta, extract_frontmatter};
pub use parse::{ParseOptions, parse_mdast};
pub use slug::{Slugger, extract_custom_id, slugify};
