//! Registry type definitions: components and the kind → component table.

use super::kind::NodeKind;
use crate::components::{self, Element};
use crate::renderer::Context;
use folio_core::FolioError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A presentational component that can render a content node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Internal/external link.
    CustomLink,
    /// Body paragraph.
    CustomText,
    /// Bulleted list.
    CustomUnorderedList,
    /// Two-tone list item.
    CustomListItem,
    /// Code block frame.
    CustomPre,
    /// Code with token colours.
    CustomCode,
    /// Generic block with the code-title special case.
    CustomDiv,
    /// Captioned image with optional aspect ratio.
    CustomImage,
    /// Heading of any level; the level picks the size.
    CustomTitle,
    /// Checkbox control.
    Checkbox,
    /// Vertical stack.
    VStack,
    /// Full-width spacer.
    Padding,
    /// Inverse colour-mode name as text.
    TextColorMode,
}

impl Component {
    /// Component name as exposed to MDX authors.
    pub fn name(self) -> &'static str {
        match self {
            Component::CustomLink => "CustomLink",
            Component::CustomText => "CustomText",
            Component::CustomUnorderedList => "CustomUnorderedList",
            Component::CustomListItem => "CustomListItem",
            Component::CustomPre => "CustomPre",
            Component::CustomCode => "CustomCode",
            Component::CustomDiv => "CustomDiv",
            Component::CustomImage => "CustomImage",
            Component::CustomTitle => "CustomTitle",
            Component::Checkbox => "Checkbox",
            Component::VStack => "VStack",
            Component::Padding => "Padding",
            Component::TextColorMode => "TextColorMode",
        }
    }

    /// Whether this component understands nodes of `kind`.
    pub fn accepts(self, kind: NodeKind) -> bool {
        matches!(
            (self, kind),
            (Component::CustomLink, NodeKind::Link)
                | (Component::CustomText, NodeKind::Paragraph)
                | (Component::CustomUnorderedList, NodeKind::UnorderedList)
                | (Component::CustomListItem, NodeKind::ListItem)
                | (Component::CustomPre, NodeKind::Pre)
                | (Component::CustomCode, NodeKind::Code)
                | (Component::CustomDiv, NodeKind::Div)
                | (Component::CustomImage, NodeKind::Image)
                | (Component::CustomTitle, NodeKind::Heading(_))
                | (Component::Checkbox, NodeKind::Checkbox)
                | (Component::VStack, NodeKind::VStack)
                | (Component::Padding, NodeKind::Padding)
                | (Component::TextColorMode, NodeKind::TextColorMode)
        )
    }

    /// Renders `element` with already-rendered `children`.
    ///
    /// Returns false without writing anything when the element is not one
    /// this component draws.
    pub fn render(self, element: &Element, children: &str, ctx: &mut Context) -> bool {
        match (self, element) {
            (Component::CustomLink, Element::Link(props)) => {
                components::link::render(props, children, ctx)
            }
            (Component::CustomText, Element::Paragraph) => {
                components::text::render_paragraph(children, ctx)
            }
            (Component::CustomUnorderedList, Element::UnorderedList) => {
                components::text::render_unordered_list(children, ctx)
            }
            (Component::CustomListItem, Element::ListItem) => {
                components::text::render_list_item(children, ctx)
            }
            (Component::CustomPre, Element::Pre(props)) => {
                components::code::render_pre(props, children, ctx)
            }
            (Component::CustomCode, Element::Code(props)) => {
                components::code::render_code(props, children, ctx)
            }
            (Component::CustomDiv, Element::Div(props)) => {
                components::code::render_div(props, children, ctx)
            }
            (Component::CustomImage, Element::Image(props)) => {
                components::image::render(props, ctx)
            }
            (Component::CustomTitle, Element::Heading(props)) => {
                components::title::render(props, children, ctx)
            }
            (Component::Checkbox, Element::Checkbox(props)) => {
                components::text::render_checkbox(props, children, ctx)
            }
            (Component::VStack, Element::VStack(props)) => {
                components::text::render_vstack(props, children, ctx)
            }
            (Component::Padding, Element::Padding(props)) => {
                components::text::render_padding(props, children, ctx)
            }
            (Component::TextColorMode, Element::TextColorMode) => {
                components::text::render_text_color_mode(ctx)
            }
            _ => return false,
        }
        true
    }
}

/// Table deciding which component renders each node kind.
///
/// A kind holds at most one component. Kinds without an entry are drawn by
/// the plain HTML fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    entries: BTreeMap<NodeKind, Component>,
}

impl ComponentRegistry {
    /// Registry with no entries; every node renders as plain HTML.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Maps `kind` to `component`, returning the component it replaced.
    ///
    /// Pairings the component cannot draw are rejected with
    /// [`FolioError::ComponentMismatch`].
    pub fn insert(
        &mut self,
        kind: NodeKind,
        component: Component,
    ) -> Result<Option<Component>, FolioError> {
        if !component.accepts(kind) {
            return Err(FolioError::ComponentMismatch {
                component: component.name().to_string(),
                tag: kind.tag().to_string(),
            });
        }
        Ok(self.entries.insert(kind, component))
    }

    /// Drops the mapping for `kind` so it falls through to plain HTML.
    pub fn remove(&mut self, kind: NodeKind) -> Option<Component> {
        self.entries.remove(&kind)
    }

    /// Component for `kind`, if one is registered.
    pub fn component_for(&self, kind: NodeKind) -> Option<Component> {
        self.entries.get(&kind).copied()
    }

    /// Component for a tag string.
    pub fn component_for_tag(&self, tag: &str) -> Option<Component> {
        NodeKind::from_tag(tag).and_then(|kind| self.component_for(kind))
    }

    /// Registered `(tag, component name)` pairs in kind order.
    pub fn tags(&self) -> Vec<(&'static str, &'static str)> {
        self.entries
            .iter()
            .map(|(kind, component)| (kind.tag(), component.name()))
            .collect()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Default registry with `config` applied.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, FolioError> {
        let mut registry = Self::mdx_defaults();
        for tag in &config.disabled {
            let kind: NodeKind = tag.parse()?;
            registry.remove(kind);
        }
        Ok(registry)
    }
}

/// Host-supplied registry adjustments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Tags whose component is switched off (e.g. `["p", "Image"]`).
    #[serde(default)]
    pub disabled: Vec<String>,
}
