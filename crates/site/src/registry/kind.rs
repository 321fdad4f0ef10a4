//! Node kinds the content pipeline can hand to a component.

use folio_core::FolioError;
use std::fmt;
use std::str::FromStr;

/// Heading level `h1`..`h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    /// `h1`
    H1,
    /// `h2`
    H2,
    /// `h3`
    H3,
    /// `h4`
    H4,
    /// `h5`
    H5,
    /// `h6`
    H6,
}

impl HeadingLevel {
    /// All levels, outermost first.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Level for a markdown heading depth; `None` outside 1..=6.
    pub fn from_depth(depth: u8) -> Option<Self> {
        Self::ALL.get(usize::from(depth).checked_sub(1)?).copied()
    }

    /// Heading depth, 1..=6.
    pub fn depth(self) -> u8 {
        self as u8 + 1
    }

    /// Element name, `h1`..`h6`.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// Kind of content node, keyed by the tag the MDX pipeline uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// `a`
    Link,
    /// `p`
    Paragraph,
    /// `ul`
    UnorderedList,
    /// `li`
    ListItem,
    /// `pre`
    Pre,
    /// `code`
    Code,
    /// `div`
    Div,
    /// `h1`..`h6`
    Heading(HeadingLevel),
    /// `<Image>`
    Image,
    /// `<Checkbox>`
    Checkbox,
    /// `<VStack>`
    VStack,
    /// `<Padding>`
    Padding,
    /// `<TextColorMode>`
    TextColorMode,
}

impl NodeKind {
    /// Every kind, in registry order.
    pub const ALL: [NodeKind; 18] = [
        NodeKind::Link,
        NodeKind::Paragraph,
        NodeKind::UnorderedList,
        NodeKind::ListItem,
        NodeKind::Pre,
        NodeKind::Code,
        NodeKind::Div,
        NodeKind::Image,
        NodeKind::Checkbox,
        NodeKind::VStack,
        NodeKind::Padding,
        NodeKind::TextColorMode,
        NodeKind::Heading(HeadingLevel::H1),
        NodeKind::Heading(HeadingLevel::H2),
        NodeKind::Heading(HeadingLevel::H3),
        NodeKind::Heading(HeadingLevel::H4),
        NodeKind::Heading(HeadingLevel::H5),
        NodeKind::Heading(HeadingLevel::H6),
    ];

    /// Tag string for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Link => "a",
            NodeKind::Paragraph => "p",
            NodeKind::UnorderedList => "ul",
            NodeKind::ListItem => "li",
            NodeKind::Pre => "pre",
            NodeKind::Code => "code",
            NodeKind::Div => "div",
            NodeKind::Heading(level) => level.tag(),
            NodeKind::Image => "Image",
            NodeKind::Checkbox => "Checkbox",
            NodeKind::VStack => "VStack",
            NodeKind::Padding => "Padding",
            NodeKind::TextColorMode => "TextColorMode",
        }
    }

    /// Kind for a tag string. Tags are case-sensitive, as in JSX.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NodeKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| FolioError::UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_for_every_kind() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(NodeKind::from_tag("Image"), Some(NodeKind::Image));
        assert_eq!(NodeKind::from_tag("image"), None);
        assert_eq!(NodeKind::from_tag("img"), None);
        assert!(matches!(
            "h7".parse::<NodeKind>(),
            Err(FolioError::UnknownTag(tag)) if tag == "h7"
        ));
    }

    #[test]
    fn heading_depths() {
        assert_eq!(HeadingLevel::from_depth(0), None);
        assert_eq!(HeadingLevel::from_depth(1), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_depth(6), Some(HeadingLevel::H6));
        assert_eq!(HeadingLevel::from_depth(7), None);
        for level in HeadingLevel::ALL {
            assert_eq!(HeadingLevel::from_depth(level.depth()), Some(level));
        }
    }
}
