//! Type definitions for the document renderer.

use folio_core::{PostMeta, RenderDiagnostics};
use serde::Serialize;

/// Heading metadata extracted during rendering.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Slugified identifier.
    pub slug: String,
    /// Visible heading text.
    pub text: String,
}

/// Output of rendering one markdown/MDX body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Rendered HTML.
    pub html: String,
    /// Headings in document order, for a table of contents.
    pub headings: Vec<HeadingEntry>,
    /// Non-fatal conditions found while rendering.
    pub diagnostics: RenderDiagnostics,
}

/// Output of rendering a post (frontmatter plus body).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    /// Raw frontmatter as a JSON object.
    pub frontmatter: serde_json::Value,
    /// Typed view of the frontmatter.
    pub meta: PostMeta,
    /// Rendered body.
    pub document: RenderedDocument,
}

/// Type of block the renderer is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Document root - not inside any specific block element.
    Root,
    /// Inside a paragraph.
    Paragraph,
    /// Inside a list.
    List {
        /// False for tight lists, whose paragraphs lose their wrapper.
        spread: bool,
    },
    /// Inside a table.
    Table,
}
