//! JSX attribute reading and element construction for MDX content.

use crate::components::{
    BlockProps, CheckboxProps, Element, ImageProps, LinkProps, PaddingProps, StackProps,
    TitleProps,
};
use crate::registry::NodeKind;
use markdown::mdast::{AttributeContent, AttributeValue};

/// Value of one JSX attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttrValue<'n> {
    /// `name="value"`
    Literal(&'n str),
    /// `name={value}`
    Expression(&'n str),
    /// Bare `name`.
    Flag,
}

impl<'n> AttrValue<'n> {
    /// String form: literals as written, expressions with one layer of
    /// string quotes removed (`{"a"}` → `a`, `{16/9}` → `16/9`).
    fn text(self) -> Option<&'n str> {
        match self {
            AttrValue::Literal(value) => Some(value),
            AttrValue::Expression(expr) => Some(unquote(expr.trim())),
            AttrValue::Flag => None,
        }
    }
}

fn unquote(expr: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if let Some(inner) = expr
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    expr
}

/// Named attributes of one JSX element, in source order. Spread attributes
/// are skipped.
#[derive(Debug, Default)]
pub(crate) struct JsxAttrs<'n> {
    values: Vec<(&'n str, AttrValue<'n>)>,
}

impl<'n> JsxAttrs<'n> {
    pub(crate) fn from_mdast(attributes: &'n [AttributeContent]) -> Self {
        let values = attributes
            .iter()
            .filter_map(|attr| match attr {
                AttributeContent::Property(prop) => {
                    let value = match &prop.value {
                        Some(AttributeValue::Literal(value)) => AttrValue::Literal(value),
                        Some(AttributeValue::Expression(expr)) => AttrValue::Expression(&expr.value),
                        None => AttrValue::Flag,
                    };
                    Some((prop.name.as_str(), value))
                }
                AttributeContent::Expression(_) => {
                    log::debug!("spread attribute ignored");
                    None
                }
            })
            .collect();
        Self { values }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'n str, AttrValue<'n>)> + '_ {
        self.values.iter().copied()
    }

    /// First attribute among `names` (aliases), last occurrence wins.
    fn get(&self, names: &[&str]) -> Option<AttrValue<'n>> {
        self.values
            .iter()
            .rev()
            .find(|(name, _)| names.contains(name))
            .map(|(_, value)| *value)
    }

    fn string(&self, names: &[&str]) -> Option<String> {
        self.get(names)
            .and_then(AttrValue::text)
            .map(str::to_string)
    }

    fn flag(&self, names: &[&str]) -> bool {
        match self.get(names) {
            Some(AttrValue::Flag) => true,
            Some(value) => value.text().is_some_and(|text| text == "true"),
            None => false,
        }
    }

    fn number(&self, names: &[&str]) -> Option<u32> {
        self.get(names)
            .and_then(AttrValue::text)
            .and_then(|text| text.trim().trim_end_matches("px").parse().ok())
    }
}

/// Builds the element for a JSX tag that names a registry kind.
pub(crate) fn element_for(kind: NodeKind, attrs: &JsxAttrs<'_>) -> Element {
    let block = || BlockProps {
        class_name: attrs.string(&["className", "class"]),
    };
    match kind {
        NodeKind::Link => Element::Link(LinkProps {
            href: attrs.string(&["href"]),
            title: attrs.string(&["title"]),
        }),
        NodeKind::Paragraph => Element::Paragraph,
        NodeKind::UnorderedList => Element::UnorderedList,
        NodeKind::ListItem => Element::ListItem,
        NodeKind::Pre => Element::Pre(block()),
        NodeKind::Code => Element::Code(block()),
        NodeKind::Div => Element::Div(block()),
        NodeKind::Heading(level) => Element::Heading(TitleProps {
            level,
            id: attrs.string(&["id"]),
        }),
        NodeKind::Image => Element::Image(ImageProps {
            src: attrs.string(&["src"]).unwrap_or_default(),
            alt: attrs.string(&["alt"]).unwrap_or_default(),
            width: attrs.number(&["width"]),
            height: attrs.number(&["height"]),
            ratio: attrs.string(&["ratio"]),
            chakra_width: attrs.string(&["chakraWidth"]),
            border: attrs.flag(&["border"]),
        }),
        NodeKind::Checkbox => Element::Checkbox(CheckboxProps {
            checked: attrs.flag(&["checked", "isChecked", "defaultChecked"]),
            disabled: attrs.flag(&["disabled", "isDisabled", "isReadOnly"]),
        }),
        NodeKind::VStack => Element::VStack(StackProps {
            spacing: attrs.string(&["spacing"]),
        }),
        NodeKind::Padding => Element::Padding(PaddingProps {
            height: attrs.string(&["height", "h"]),
        }),
        NodeKind::TextColorMode => Element::TextColorMode,
    }
}

/// Component-style names (`Image`, `ui.Card`) as opposed to HTML tags.
pub(crate) fn is_component_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase()) || name.contains('.')
}

/// HTML elements written without a closing tag.
pub(crate) fn is_void_tag(name: &str) -> bool {
    matches!(
        name,
        "area" | "br" | "col" | "embed" | "hr" | "img" | "input" | "source" | "track" | "wbr"
    )
}

/// Tags that run or embed active content.
pub(crate) fn is_scripting_tag(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "script" | "style" | "iframe" | "object" | "embed" | "frame" | "frameset" | "base"
    )
}

/// Event handlers and `javascript:` URLs.
pub(crate) fn is_scripting_attr(name: &str, value: AttrValue<'_>) -> bool {
    let name = name.to_ascii_lowercase();
    if name.starts_with("on") {
        return true;
    }
    matches!(name.as_str(), "href" | "src" | "action" | "formaction" | "xlink:href")
        && value.text().is_some_and(|url| {
            url.trim_start()
                .get(..11)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ParseOptions, parse_mdast};
    use markdown::mdast::Node;

    fn first_element(source: &str) -> (String, Vec<AttributeContent>) {
        let Node::Root(root) = parse_mdast(source, &ParseOptions::mdx()).unwrap() else {
            panic!("expected root");
        };
        match &root.children[0] {
            Node::MdxJsxFlowElement(el) => (el.name.clone().unwrap(), el.attributes.clone()),
            other => panic!("expected flow element, got {other:?}"),
        }
    }

    #[test]
    fn image_props_from_literals_and_expressions() {
        let (name, attributes) = first_element(
            "<Image src=\"/me.jpg\" alt={\"Me\"} width={640} ratio={16/9} chakraWidth=\"70%\" border />",
        );
        let kind = NodeKind::from_tag(&name).unwrap();
        let element = element_for(kind, &JsxAttrs::from_mdast(&attributes));
        assert_eq!(
            element,
            Element::Image(ImageProps {
                src: "/me.jpg".into(),
                alt: "Me".into(),
                width: Some(640),
                height: None,
                ratio: Some("16/9".into()),
                chakra_width: Some("70%".into()),
                border: true,
            })
        );
    }

    #[test]
    fn checkbox_flags() {
        let (_, attributes) = first_element("<Checkbox isChecked={true} disabled={false} />");
        let element = element_for(NodeKind::Checkbox, &JsxAttrs::from_mdast(&attributes));
        assert_eq!(
            element,
            Element::Checkbox(CheckboxProps {
                checked: true,
                disabled: false
            })
        );
    }

    #[test]
    fn component_names() {
        assert!(is_component_name("Image"));
        assert!(is_component_name("ui.Card"));
        assert!(!is_component_name("section"));
    }

    #[test]
    fn scripting_markup() {
        assert!(is_scripting_tag("script"));
        assert!(is_scripting_tag("IFRAME"));
        assert!(!is_scripting_tag("section"));
        assert!(is_scripting_attr("onerror", AttrValue::Literal("x()")));
        assert!(is_scripting_attr("href", AttrValue::Literal(" JavaScript:alert(1)")));
        assert!(!is_scripting_attr("href", AttrValue::Literal("/about")));
        assert!(!is_scripting_attr("class", AttrValue::Flag));
    }

    #[test]
    fn unquote_strips_one_layer() {
        assert_eq!(unquote("\"a\""), "a");
        assert_eq!(unquote("'b'"), "b");
        assert_eq!(unquote("16/9"), "16/9");
        assert_eq!(unquote("\""), "\"");
    }
}
