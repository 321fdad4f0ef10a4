//! Markdown/MDX parsing into an mdast tree.

use crate::{FolioError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable MDX JSX elements (`<Image ratio={16/9} />`).
    pub mdx: bool,
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
    /// Allow raw HTML nodes in the AST instead of JSX.
    pub raw_html: bool,
    /// Enable math constructs ($inline$ and $$block$$).
    pub math: bool,
}

impl ParseOptions {
    /// Defaults for blog posts: MDX elements, GFM, frontmatter.
    pub const fn mdx() -> Self {
        Self {
            mdx: true,
            gfm: true,
            frontmatter: true,
            raw_html: false,
            math: false,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            // JSX children are routinely indented; never read them as code.
            code_indented: false,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        // Raw HTML and JSX claim the same `<` syntax; HTML wins when allowed.
        if self.mdx && !self.raw_html {
            constructs.mdx_jsx_flow = true;
            constructs.mdx_jsx_text = true;
        }

        if self.math {
            constructs.math_flow = true;
            constructs.math_text = true;
        }

        markdown::ParseOptions {
            constructs,
            math_text_single_dollar: self.math,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::mdx()
    }
}

/// Parse markdown into an mdast tree.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, FolioError> {
    markdown::to_mdast(input, &options.to_markdown()).map_err(|err| FolioError::Parse {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match message.place.as_deref() {
        Some(Place::Point(point)) => SourceLocation::new(point.line, point.column),
        Some(Place::Position(position)) => {
            SourceLocation::new(position.start.line, position.start.column)
        }
        None => SourceLocation::new(1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_jsx_elements() {
        let tree = parse_mdast("<Image src=\"/a.png\" alt=\"A\" />", &ParseOptions::mdx())
            .expect("should parse");
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        assert!(matches!(root.children[0], Node::MdxJsxFlowElement(_)));
    }

    #[test]
    fn raw_html_replaces_jsx() {
        let options = ParseOptions {
            raw_html: true,
            ..ParseOptions::mdx()
        };
        let tree = parse_mdast("<div>hi</div>", &options).expect("should parse");
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        assert!(matches!(root.children[0], Node::Html(_)));
    }

    #[test]
    fn unclosed_jsx_reports_location() {
        let err = parse_mdast("Text\n\n<VStack>\n", &ParseOptions::mdx()).unwrap_err();
        match err {
            FolioError::Parse { location, .. } => assert!(location.line >= 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
