//! Presentational components and their typed inputs.
//!
//! Every component receives its props plus the already-rendered HTML of its
//! children and writes into the render context.

/// Pre, code and div (code-title) components.
pub mod code;
/// Captioned image component and the image provider seam.
pub mod image;
/// Internal/external link component.
pub mod link;
/// Paragraph, lists, checkbox, stack, padding and colour-mode text.
pub mod text;
/// Heading component and its size table.
pub mod title;

pub use image::{ImageProvider, ImageSource, PlainImage};
pub use link::LinkKind;
pub use title::TitleSize;

use crate::registry::{HeadingLevel, NodeKind};

/// Input of the link component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkProps {
    /// Link target; absent or empty renders as external.
    pub href: Option<String>,
    /// Optional `title` attribute.
    pub title: Option<String>,
}

/// Input of the title component.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleProps {
    /// Level of the heading element that invoked the component.
    pub level: HeadingLevel,
    /// Anchor id.
    pub id: Option<String>,
}

/// Input of the image component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageProps {
    /// Image URL.
    pub src: String,
    /// Alternative text, also shown as the caption.
    pub alt: String,
    /// Intrinsic width in pixels.
    pub width: Option<u32>,
    /// Intrinsic height in pixels.
    pub height: Option<u32>,
    /// Aspect ratio as written (`1.5`, `16/9`).
    pub ratio: Option<String>,
    /// Width of the aspect-ratio container; `full` when absent.
    pub chakra_width: Option<String>,
    /// Rounded border.
    pub border: bool,
}

/// Class names carried by block-level elements (`pre`, `code`, `div`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockProps {
    /// Space-separated class list.
    pub class_name: Option<String>,
}

/// Input of the checkbox component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxProps {
    /// Checked state.
    pub checked: bool,
    /// Read-only control.
    pub disabled: bool,
}

/// Input of the vertical stack component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackProps {
    /// Gap between children (space token or CSS length).
    pub spacing: Option<String>,
}

/// Input of the padding component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaddingProps {
    /// Height (size token or CSS length); `1px` when absent.
    pub height: Option<String>,
}

/// A content node ready to be handed to a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// `a`
    Link(LinkProps),
    /// `p`
    Paragraph,
    /// `ul`
    UnorderedList,
    /// `li`
    ListItem,
    /// `pre`
    Pre(BlockProps),
    /// `code`
    Code(BlockProps),
    /// `div`
    Div(BlockProps),
    /// `h1`..`h6`
    Heading(TitleProps),
    /// `<Image>`
    Image(ImageProps),
    /// `<Checkbox>`
    Checkbox(CheckboxProps),
    /// `<VStack>`
    VStack(StackProps),
    /// `<Padding>`
    Padding(PaddingProps),
    /// `<TextColorMode>`
    TextColorMode,
}

impl Element {
    /// Registry key for this element.
    pub fn kind(&self) -> NodeKind {
        match self {
            Element::Link(_) => NodeKind::Link,
            Element::Paragraph => NodeKind::Paragraph,
            Element::UnorderedList => NodeKind::UnorderedList,
            Element::ListItem => NodeKind::ListItem,
            Element::Pre(_) => NodeKind::Pre,
            Element::Code(_) => NodeKind::Code,
            Element::Div(_) => NodeKind::Div,
            Element::Heading(props) => NodeKind::Heading(props.level),
            Element::Image(_) => NodeKind::Image,
            Element::Checkbox(_) => NodeKind::Checkbox,
            Element::VStack(_) => NodeKind::VStack,
            Element::Padding(_) => NodeKind::Padding,
            Element::TextColorMode => NodeKind::TextColorMode,
        }
    }
}
