//! The registry the blog's MDX content is rendered with.

use super::kind::{HeadingLevel, NodeKind};
use super::types::{Component, ComponentRegistry};
use once_cell::sync::Lazy;

/// Process-wide default registry, built on first use.
pub static MDX_COMPONENTS: Lazy<ComponentRegistry> = Lazy::new(ComponentRegistry::mdx_defaults);

const AUTHORED: [(NodeKind, Component); 12] = [
    (NodeKind::Link, Component::CustomLink),
    (NodeKind::Paragraph, Component::CustomText),
    (NodeKind::UnorderedList, Component::CustomUnorderedList),
    (NodeKind::ListItem, Component::CustomListItem),
    (NodeKind::Pre, Component::CustomPre),
    (NodeKind::Code, Component::CustomCode),
    (NodeKind::Div, Component::CustomDiv),
    (NodeKind::VStack, Component::VStack),
    (NodeKind::Padding, Component::Padding),
    (NodeKind::Checkbox, Component::Checkbox),
    (NodeKind::TextColorMode, Component::TextColorMode),
    (NodeKind::Image, Component::CustomImage),
];

impl ComponentRegistry {
    /// Builds the default mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_site::registry::{Component, ComponentRegistry, NodeKind};
    ///
    /// let registry = ComponentRegistry::mdx_defaults();
    /// assert_eq!(registry.component_for_tag("h3"), Some(Component::CustomTitle));
    /// assert_eq!(registry.component_for(NodeKind::Link), Some(Component::CustomLink));
    /// ```
    pub fn mdx_defaults() -> Self {
        let mut registry = ComponentRegistry::empty();
        let titles = HeadingLevel::ALL
            .into_iter()
            .map(|level| (NodeKind::Heading(level), Component::CustomTitle));

        for (kind, component) in AUTHORED.into_iter().chain(titles) {
            if let Err(err) = registry.insert(kind, component) {
                log::error!("default registry entry rejected: {err}");
            }
        }
        registry
    }
}
