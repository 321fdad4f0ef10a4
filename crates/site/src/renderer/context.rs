//! Rendering context for the document renderer.

use super::Options;
use super::types::{HeadingEntry, RenderedDocument, Scope};
use crate::components::ImageProvider;
use crate::html::HtmlBuf;
use crate::registry::ComponentRegistry;
use crate::style::Style;
use std::collections::HashMap;

use folio_core::{ColorMode, RenderDiagnostics, RenderWarning, Slugger, SourceLocation};

/// A collected footnote definition.
#[derive(Debug, Clone)]
struct Footnote {
    id: String,
    html: String,
}

/// Destination of a `[label]: url "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkDefinition {
    pub(crate) url: String,
    pub(crate) title: Option<String>,
}

/// State threaded through one render pass.
///
/// The colour mode, registry and image provider are explicit inputs of the
/// pass; nothing is read from process-wide state.
pub struct Context<'a> {
    html: HtmlBuf,
    options: &'a Options,
    registry: &'a ComponentRegistry,
    images: &'a dyn ImageProvider,
    stack: Vec<Scope>,
    slugger: Slugger,
    headings: Vec<HeadingEntry>,
    diagnostics: RenderDiagnostics,
    location: Option<SourceLocation>,
    footnote_order: Vec<String>,
    footnotes: Vec<Footnote>,
    definitions: HashMap<String, LinkDefinition>,
}

impl<'a> Context<'a> {
    /// Creates a context for one render pass.
    pub fn new(
        options: &'a Options,
        registry: &'a ComponentRegistry,
        images: &'a dyn ImageProvider,
    ) -> Self {
        Self {
            html: HtmlBuf::with_capacity(4096),
            options,
            registry,
            images,
            stack: vec![Scope::Root],
            slugger: Slugger::new(),
            headings: Vec::new(),
            diagnostics: RenderDiagnostics::new(),
            location: None,
            footnote_order: Vec::new(),
            footnotes: Vec::new(),
            definitions: HashMap::new(),
        }
    }

    /// Colour mode of this pass.
    pub fn color_mode(&self) -> ColorMode {
        self.options.color_mode
    }

    /// Registry the pass dispatches through.
    pub fn registry(&self) -> &'a ComponentRegistry {
        self.registry
    }

    /// Image provider for `<img>` elements.
    pub fn images(&self) -> &'a dyn ImageProvider {
        self.images
    }

    /// Writes markup verbatim.
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_raw(s);
    }

    /// Writes escaped text.
    pub fn push_text(&mut self, s: &str) {
        self.html.push_text(s);
    }

    /// Writes ` name="value"` with the value escaped.
    pub fn push_attr(&mut self, name: &str, value: &str) {
        self.html.push_attr(name, value);
    }

    /// Writes ` style="…"` unless empty.
    pub fn push_style(&mut self, style: &Style) {
        self.html.push_style(style);
    }

    /// Writes an opening tag with class and style.
    pub fn open(&mut self, tag: &str, class: &str, style: &Style) {
        self.html.open(tag, class, style);
    }

    /// Writes a closing tag.
    pub fn close(&mut self, tag: &str) {
        self.html.close(tag);
    }

    /// Runs `f` against an empty buffer and returns what it wrote, leaving
    /// the current buffer untouched.
    pub fn capture(&mut self, f: impl FnOnce(&mut Self)) -> String {
        let saved = std::mem::take(&mut self.html);
        f(self);
        std::mem::replace(&mut self.html, saved).into_string()
    }

    /// Enters a new scope by pushing it onto the stack.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Exits the current scope by popping from the stack.
    pub fn exit(&mut self) -> Option<Scope> {
        self.stack.pop()
    }

    /// True inside a tight (non-spread) list, where paragraphs lose their `<p>`.
    pub fn is_in_tight_list(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|scope| matches!(scope, Scope::List { .. }))
            .is_some_and(|scope| matches!(scope, Scope::List { spread: false }))
    }

    /// True inside a paragraph.
    pub fn is_in_paragraph(&self) -> bool {
        self.stack.contains(&Scope::Paragraph)
    }

    /// Sets the source location attached to warnings from here on.
    pub fn set_location(&mut self, location: Option<SourceLocation>) {
        if location.is_some() {
            self.location = location;
        }
    }

    /// Location of the node being rendered.
    pub fn location(&self) -> Option<SourceLocation> {
        self.location.clone()
    }

    /// Records a non-fatal condition.
    pub fn warn(&mut self, warning: RenderWarning) {
        self.diagnostics.warn(warning);
    }

    /// Records a link definition. The first definition of a label wins.
    pub(crate) fn define(&mut self, identifier: &str, definition: LinkDefinition) {
        self.definitions
            .entry(normalize_label(identifier))
            .or_insert(definition);
    }

    /// Definition for a reference label, matched case-insensitively.
    pub(crate) fn definition(&self, identifier: &str) -> Option<LinkDefinition> {
        self.definitions.get(&normalize_label(identifier)).cloned()
    }

    /// Generates a unique slug for a heading.
    pub fn generate_slug(&mut self, text: &str) -> String {
        self.slugger.next_slug(text)
    }

    /// Reserves a slug so future auto-generated slugs won't collide with it.
    pub fn reserve_slug(&mut self, slug: &str) {
        self.slugger.reserve(slug);
    }

    /// Adds a heading entry to the list of headings.
    pub fn add_heading(&mut self, entry: HeadingEntry) {
        self.headings.push(entry);
    }

    /// Returns whether lazy image loading is enabled.
    pub fn lazy_images_enabled(&self) -> bool {
        self.options.enable_lazy_images
    }

    /// Returns whether raw HTML passthrough is enabled.
    pub fn raw_html_allowed(&self) -> bool {
        self.options.allow_raw_html
    }

    /// Returns whether heading self-links are enabled.
    pub fn heading_autolinks_enabled(&self) -> bool {
        self.options.enable_heading_autolinks
    }

    /// 1-based number of footnote `id`, assigned on first reference.
    pub fn footnote_number(&mut self, id: &str) -> usize {
        match self.footnote_order.iter().position(|known| known == id) {
            Some(index) => index + 1,
            None => {
                self.footnote_order.push(id.to_string());
                self.footnote_order.len()
            }
        }
    }

    /// Stores the rendered body of footnote `id` for the closing section.
    pub fn push_footnote(&mut self, id: &str, html: String) {
        self.footnotes.push(Footnote {
            id: id.to_string(),
            html,
        });
    }

    /// Consumes the context, appending the footnotes section if needed.
    pub fn finish(mut self) -> RenderedDocument {
        if !self.footnotes.is_empty() {
            let mut footnotes = std::mem::take(&mut self.footnotes);
            // Referenced notes in reference order, unreferenced ones last.
            footnotes.sort_by_key(|note| {
                self.footnote_order
                    .iter()
                    .position(|id| *id == note.id)
                    .unwrap_or(usize::MAX)
            });

            self.push_raw("<section class=\"footnotes\" data-footnotes><ol>");
            for note in &footnotes {
                self.push_raw("<li");
                self.push_attr("id", &format!("fn-{}", note.id));
                self.push_raw(">");
                self.push_raw(&note.html);
                self.push_raw("</li>");
            }
            self.push_raw("</ol></section>");
        }

        RenderedDocument {
            html: self.html.into_string(),
            headings: self.headings,
            diagnostics: self.diagnostics,
        }
    }
}

fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
