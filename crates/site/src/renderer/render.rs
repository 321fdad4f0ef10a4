//! mdast walk: turns each node into an [`Element`] for the registry, or into
//! plain HTML where no component applies.

use super::context::{Context, LinkDefinition};
use super::jsx::{self, AttrValue, JsxAttrs};
use super::types::{HeadingEntry, Scope};
use crate::components::{
    self, BlockProps, CheckboxProps, Element, ImageSource, LinkProps, TitleProps,
};
use crate::registry::{HeadingLevel, NodeKind};
use crate::transform;
use folio_core::{
    CODE_TITLE_CLASS, RenderWarning, SourceLocation, extract_custom_id, split_code_title,
};
use markdown::mdast::{self, AttributeContent, Node};

/// Renders `element` through its registered component, or as plain HTML
/// when the registry has no entry for its kind.
pub fn render_element(element: &Element, children: &str, ctx: &mut Context) {
    let registry = ctx.registry();
    if let Some(component) = registry.component_for(element.kind()) {
        if component.render(element, children, ctx) {
            return;
        }
        log::debug!(
            "{} cannot draw <{}>, using plain HTML",
            component.name(),
            element.kind()
        );
    }
    render_plain(element, children, ctx);
}

fn render_plain(element: &Element, children: &str, ctx: &mut Context) {
    match element {
        Element::Link(props) => {
            ctx.push_raw("<a");
            if let Some(href) = &props.href {
                ctx.push_attr("href", href);
            }
            if let Some(title) = &props.title {
                ctx.push_attr("title", title);
            }
            ctx.push_raw(">");
            ctx.push_raw(children);
            ctx.close("a");
        }
        Element::Heading(props) => {
            let tag = props.level.tag();
            ctx.push_raw("<");
            ctx.push_raw(tag);
            if let Some(id) = &props.id {
                ctx.push_attr("id", id);
            }
            ctx.push_raw(">");
            ctx.push_raw(children);
            ctx.close(tag);
        }
        Element::Image(props) => {
            let img = ctx.images().render(&ImageSource {
                src: &props.src,
                alt: &props.alt,
                width: props.width,
                height: props.height,
                class_name: "",
                lazy: ctx.lazy_images_enabled(),
            });
            ctx.push_raw(&img);
        }
        Element::Checkbox(props) => {
            ctx.push_raw("<input type=\"checkbox\"");
            if props.checked {
                ctx.push_raw(" checked");
            }
            if props.disabled {
                ctx.push_raw(" disabled");
            }
            ctx.push_raw(" />");
            ctx.push_raw(children);
        }
        Element::TextColorMode => {}
        Element::Pre(props) | Element::Code(props) | Element::Div(props) => {
            let tag = element.kind().tag();
            ctx.open(tag, props.class_name.as_deref().unwrap_or(""), &Default::default());
            ctx.push_raw(children);
            ctx.close(tag);
        }
        Element::Paragraph | Element::UnorderedList | Element::ListItem => {
            let tag = element.kind().tag();
            ctx.open(tag, "", &Default::default());
            ctx.push_raw(children);
            ctx.close(tag);
        }
        Element::VStack(_) | Element::Padding(_) => {
            ctx.open("div", "", &Default::default());
            ctx.push_raw(children);
            ctx.close("div");
        }
    }
}

fn render_children(children: &[Node], ctx: &mut Context) {
    for child in children {
        render_node(child, ctx);
    }
}

fn capture_children(children: &[Node], ctx: &mut Context) -> String {
    ctx.capture(|ctx| render_children(children, ctx))
}

/// Recursively renders an mdast node.
pub fn render_node(node: &Node, ctx: &mut Context) {
    let location = SourceLocation::from_position(node.position());
    ctx.set_location(location.clone());

    match node {
        Node::Root(root) => {
            collect_definitions(&root.children, ctx);
            render_children(&root.children, ctx);
        }
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Paragraph(para) => render_paragraph(para, ctx),
        Node::Link(link) => {
            let children = capture_children(&link.children, ctx);
            let element = Element::Link(LinkProps {
                href: Some(link.url.clone()),
                title: link.title.clone(),
            });
            ctx.set_location(location);
            render_element(&element, &children, ctx);
        }
        Node::Strong(strong) => wrap_plain("strong", &strong.children, ctx),
        Node::Emphasis(emphasis) => wrap_plain("em", &emphasis.children, ctx),
        Node::Delete(delete) => wrap_plain("del", &delete.children, ctx),
        Node::Blockquote(quote) => wrap_plain("blockquote", &quote.children, ctx),
        Node::InlineCode(code) => {
            let text = ctx.capture(|ctx| ctx.push_text(&code.value));
            render_element(&Element::Code(BlockProps::default()), &text, ctx);
        }
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::List(list) => render_list(list, ctx),
        Node::ListItem(item) => render_list_item(item, ctx),
        Node::Code(code) => render_code(code, ctx),
        Node::Image(img) => {
            let html = ctx.images().render(&ImageSource {
                src: &img.url,
                alt: &img.alt,
                width: None,
                height: None,
                class_name: "",
                lazy: ctx.lazy_images_enabled(),
            });
            ctx.push_raw(&html);
        }
        Node::ThematicBreak(_) => ctx.push_raw("<hr />"),
        Node::Break(_) => ctx.push_raw("<br />"),
        Node::Html(html) => render_html(html, ctx),
        Node::Table(table) => render_table(table, ctx),
        Node::TableRow(_) | Node::TableCell(_) => {}
        Node::MdxJsxFlowElement(el) => {
            render_jsx(el.name.as_deref(), &el.attributes, &el.children, location, ctx)
        }
        Node::MdxJsxTextElement(el) => {
            render_jsx(el.name.as_deref(), &el.attributes, &el.children, location, ctx)
        }
        Node::FootnoteReference(fnref) => render_footnote_reference(fnref, ctx),
        Node::FootnoteDefinition(fndef) => {
            let html = capture_children(&fndef.children, ctx);
            ctx.push_footnote(&fndef.identifier, html);
        }
        Node::Math(math) => {
            ctx.push_raw("<pre class=\"math math-display\"><code>");
            ctx.push_text(&math.value);
            ctx.push_raw("</code></pre>");
        }
        Node::InlineMath(math) => {
            ctx.push_raw("<code class=\"math math-inline\">");
            ctx.push_text(&math.value);
            ctx.push_raw("</code>");
        }
        Node::LinkReference(reference) => render_link_reference(reference, location, ctx),
        Node::ImageReference(reference) => render_image_reference(reference, ctx),
        Node::Yaml(_) | Node::Toml(_) | Node::Definition(_) => {}
        Node::MdxjsEsm(_) | Node::MdxFlowExpression(_) | Node::MdxTextExpression(_) => {
            log::debug!("skipping MDX expression or import");
        }
        _ => log::warn!("Unhandled markdown node type: {:?}", node),
    }
}

/// Gathers `[label]: url` definitions anywhere in the tree so references
/// may point forward.
fn collect_definitions(nodes: &[Node], ctx: &mut Context) {
    for node in nodes {
        match node {
            Node::Definition(def) => ctx.define(
                &def.identifier,
                LinkDefinition {
                    url: def.url.clone(),
                    title: def.title.clone(),
                },
            ),
            _ => {
                if let Some(children) = node.children() {
                    collect_definitions(children, ctx);
                }
            }
        }
    }
}

/// Source form of a reference's label part: `[label]`, `[]` or nothing.
fn reference_suffix(kind: &mdast::ReferenceKind, label: Option<&str>, identifier: &str) -> String {
    match kind {
        mdast::ReferenceKind::Full => format!("[{}]", label.unwrap_or(identifier)),
        mdast::ReferenceKind::Collapsed => "[]".to_string(),
        mdast::ReferenceKind::Shortcut => String::new(),
    }
}

fn render_link_reference(
    reference: &mdast::LinkReference,
    location: Option<SourceLocation>,
    ctx: &mut Context,
) {
    let children = capture_children(&reference.children, ctx);
    let Some(definition) = ctx.definition(&reference.identifier) else {
        log::debug!("no definition for link reference `{}`", reference.identifier);
        ctx.push_raw("[");
        ctx.push_raw(&children);
        ctx.push_raw("]");
        ctx.push_text(&reference_suffix(
            &reference.reference_kind,
            reference.label.as_deref(),
            &reference.identifier,
        ));
        return;
    };

    let element = Element::Link(LinkProps {
        href: Some(definition.url),
        title: definition.title,
    });
    ctx.set_location(location);
    render_element(&element, &children, ctx);
}

fn render_image_reference(reference: &mdast::ImageReference, ctx: &mut Context) {
    let Some(definition) = ctx.definition(&reference.identifier) else {
        log::debug!("no definition for image reference `{}`", reference.identifier);
        ctx.push_text(&format!(
            "![{}]{}",
            reference.alt,
            reference_suffix(
                &reference.reference_kind,
                reference.label.as_deref(),
                &reference.identifier,
            )
        ));
        return;
    };

    let html = ctx.images().render(&ImageSource {
        src: &definition.url,
        alt: &reference.alt,
        width: None,
        height: None,
        class_name: "",
        lazy: ctx.lazy_images_enabled(),
    });
    ctx.push_raw(&html);
}

fn wrap_plain(tag: &str, children: &[Node], ctx: &mut Context) {
    ctx.open(tag, "", &Default::default());
    render_children(children, ctx);
    ctx.close(tag);
}

/// Paragraphs of tight lists are written without a wrapper.
fn render_paragraph(para: &mdast::Paragraph, ctx: &mut Context) {
    if ctx.is_in_tight_list() {
        render_children(&para.children, ctx);
        return;
    }

    ctx.enter(Scope::Paragraph);
    let children = capture_children(&para.children, ctx);
    ctx.exit();
    render_element(&Element::Paragraph, &children, ctx);
}

fn render_list(list: &mdast::List, ctx: &mut Context) {
    ctx.enter(Scope::List {
        spread: list.spread,
    });
    let children = capture_children(&list.children, ctx);
    ctx.exit();

    if list.ordered {
        ctx.push_raw("<ol");
        if let Some(start) = list.start.filter(|start| *start != 1) {
            ctx.push_attr("start", &start.to_string());
        }
        ctx.push_raw(">");
        ctx.push_raw(&children);
        ctx.close("ol");
    } else {
        render_element(&Element::UnorderedList, &children, ctx);
    }
}

/// Task items put their content inside a read-only checkbox.
fn render_list_item(item: &mdast::ListItem, ctx: &mut Context) {
    let mut children = capture_children(&item.children, ctx);
    if let Some(checked) = item.checked {
        let checkbox = Element::Checkbox(CheckboxProps {
            checked,
            disabled: true,
        });
        children = ctx.capture(|ctx| render_element(&checkbox, &children, ctx));
    }
    render_element(&Element::ListItem, &children, ctx);
}

/// A fence info string `lang:title` yields a code-title block before the
/// code.
fn render_code(code: &mdast::Code, ctx: &mut Context) {
    let (lang, title) = match code.lang.as_deref() {
        Some(lang) => {
            let split = split_code_title(lang);
            (split.lang, split.title)
        }
        None => (None, None),
    };

    if let Some(title) = title {
        let text = ctx.capture(|ctx| ctx.push_text(title));
        let div = Element::Div(BlockProps {
            class_name: Some(CODE_TITLE_CLASS.to_string()),
        });
        render_element(&div, &text, ctx);
    }

    let text = ctx.capture(|ctx| ctx.push_text(&code.value));
    let code_el = Element::Code(BlockProps {
        class_name: lang.map(|lang| format!("language-{lang}")),
    });
    let inner = ctx.capture(|ctx| render_element(&code_el, &text, ctx));
    render_element(&Element::Pre(BlockProps::default()), &inner, ctx);
}

fn render_heading(heading: &mdast::Heading, ctx: &mut Context) {
    let raw_text = heading_text(&heading.children);
    let custom_id = custom_id_in_last_text(&heading.children);
    let text = match custom_id {
        Some(_) => extract_custom_id(&raw_text).0.to_string(),
        None => raw_text.clone(),
    };

    let slug = match custom_id {
        Some(id) => {
            ctx.reserve_slug(id);
            id.to_string()
        }
        None => ctx.generate_slug(&text),
    };

    ctx.add_heading(HeadingEntry {
        depth: heading.depth,
        slug: slug.clone(),
        text,
    });

    let mut children = ctx.capture(|ctx| match custom_id {
        Some(_) => render_stripping_custom_id(&heading.children, ctx),
        None => render_children(&heading.children, ctx),
    });

    // Nested anchors are invalid; headings that already link go without one.
    if ctx.heading_autolinks_enabled() && !contains_link(&heading.children) {
        let anchor = Element::Link(LinkProps {
            href: Some(format!("#{slug}")),
            title: None,
        });
        let link = ctx.capture(|ctx| render_element(&anchor, "", ctx));
        children.insert_str(0, &link);
    }

    match HeadingLevel::from_depth(heading.depth) {
        Some(level) => {
            let element = Element::Heading(TitleProps {
                level,
                id: Some(slug),
            });
            render_element(&element, &children, ctx);
        }
        None => components::title::render_depth(heading.depth, Some(slug.as_str()), &children, ctx),
    }
}

/// Plain text of heading content, for slugs and the table of contents.
fn heading_text(nodes: &[Node]) -> String {
    fn collect(node: &Node, buf: &mut String) {
        match node {
            Node::Text(text) => buf.push_str(&text.value),
            Node::InlineCode(code) => buf.push_str(&code.value),
            Node::Strong(_) | Node::Emphasis(_) | Node::Link(_) | Node::Delete(_) => {
                for child in node.children().into_iter().flatten() {
                    collect(child, buf);
                }
            }
            _ => {}
        }
    }

    let mut buf = String::new();
    for node in nodes {
        collect(node, &mut buf);
    }
    buf.trim().to_string()
}

/// `{#id}` is only honoured in the last text node, never inside code.
fn custom_id_in_last_text(nodes: &[Node]) -> Option<&str> {
    match nodes.last()? {
        Node::Text(text) => extract_custom_id(&text.value).1,
        node @ (Node::Strong(_) | Node::Emphasis(_) | Node::Link(_) | Node::Delete(_)) => {
            custom_id_in_last_text(node.children()?)
        }
        _ => None,
    }
}

fn render_stripping_custom_id(nodes: &[Node], ctx: &mut Context) {
    let Some((last, rest)) = nodes.split_last() else {
        return;
    };
    render_children(rest, ctx);

    match last {
        Node::Text(text) => ctx.push_text(extract_custom_id(&text.value).0.trim_end()),
        Node::Strong(n) => strip_wrapped("strong", &n.children, ctx),
        Node::Emphasis(n) => strip_wrapped("em", &n.children, ctx),
        Node::Delete(n) => strip_wrapped("del", &n.children, ctx),
        Node::Link(link) => {
            let children = ctx.capture(|ctx| render_stripping_custom_id(&link.children, ctx));
            let element = Element::Link(LinkProps {
                href: Some(link.url.clone()),
                title: link.title.clone(),
            });
            render_element(&element, &children, ctx);
        }
        other => render_node(other, ctx),
    }
}

fn strip_wrapped(tag: &str, children: &[Node], ctx: &mut Context) {
    ctx.open(tag, "", &Default::default());
    render_stripping_custom_id(children, ctx);
    ctx.close(tag);
}

fn contains_link(nodes: &[Node]) -> bool {
    nodes.iter().any(|node| match node {
        Node::Link(_) => true,
        Node::MdxJsxFlowElement(el) if el.name.as_deref() == Some("a") => true,
        Node::MdxJsxTextElement(el) if el.name.as_deref() == Some("a") => true,
        Node::Html(html) => {
            let lower = html.value.to_ascii_lowercase();
            lower.contains("<a ") || lower.contains("<a>")
        }
        other => other.children().is_some_and(|children| contains_link(children)),
    })
}

fn render_html(html: &mdast::Html, ctx: &mut Context) {
    if !ctx.raw_html_allowed() {
        log::debug!("escaping raw HTML: {}", html.value);
        ctx.push_text(&html.value);
        return;
    }

    match transform::rewrite_links(&html.value, ctx.color_mode()) {
        Ok(rewritten) => ctx.push_raw(&rewritten),
        Err(err) => {
            log::debug!("raw HTML left as written: {err}");
            ctx.push_raw(&html.value);
        }
    }
}

fn render_table(table: &mdast::Table, ctx: &mut Context) {
    ctx.enter(Scope::Table);
    ctx.push_raw("<table>");

    let mut rows = table.children.iter().filter_map(|row| match row {
        Node::TableRow(row) => Some(row),
        _ => None,
    });
    if let Some(head) = rows.next() {
        ctx.push_raw("<thead>");
        render_table_row(head, "th", &table.align, ctx);
        ctx.push_raw("</thead>");
    }

    let body: Vec<_> = rows.collect();
    if !body.is_empty() {
        ctx.push_raw("<tbody>");
        for row in body {
            render_table_row(row, "td", &table.align, ctx);
        }
        ctx.push_raw("</tbody>");
    }

    ctx.push_raw("</table>");
    ctx.exit();
}

fn render_table_row(
    row: &mdast::TableRow,
    cell_tag: &str,
    aligns: &[mdast::AlignKind],
    ctx: &mut Context,
) {
    ctx.push_raw("<tr>");
    for (i, cell) in row.children.iter().enumerate() {
        let Node::TableCell(cell) = cell else {
            continue;
        };
        ctx.push_raw("<");
        ctx.push_raw(cell_tag);
        match aligns.get(i) {
            Some(mdast::AlignKind::Left) => ctx.push_attr("align", "left"),
            Some(mdast::AlignKind::Right) => ctx.push_attr("align", "right"),
            Some(mdast::AlignKind::Center) => ctx.push_attr("align", "center"),
            _ => {}
        }
        ctx.push_raw(">");
        render_children(&cell.children, ctx);
        ctx.close(cell_tag);
    }
    ctx.push_raw("</tr>");
}

fn render_footnote_reference(fnref: &mdast::FootnoteReference, ctx: &mut Context) {
    let number = ctx.footnote_number(&fnref.identifier);
    ctx.push_raw("<sup><a");
    ctx.push_attr("href", &format!("#fn-{}", fnref.identifier));
    ctx.push_attr("id", &format!("fnref-{}", fnref.identifier));
    ctx.push_raw(" data-footnote-ref>");
    ctx.push_raw(&number.to_string());
    ctx.push_raw("</a></sup>");
}

/// Dispatches a JSX element: fragments render their children, registry tags
/// become elements, other lowercase tags pass through as HTML, and unknown
/// components are reported and reduced to their children.
fn render_jsx(
    name: Option<&str>,
    attributes: &[AttributeContent],
    children: &[Node],
    location: Option<SourceLocation>,
    ctx: &mut Context,
) {
    let Some(name) = name else {
        render_children(children, ctx);
        return;
    };

    let attrs = JsxAttrs::from_mdast(attributes);
    if let Some(kind) = NodeKind::from_tag(name) {
        let element = jsx::element_for(kind, &attrs);
        let inner = capture_children(children, ctx);
        ctx.set_location(location);
        render_element(&element, &inner, ctx);
        return;
    }

    if jsx::is_component_name(name) {
        ctx.warn(RenderWarning::UnknownComponent {
            name: name.to_string(),
            location: ctx.location(),
        });
        render_children(children, ctx);
        return;
    }

    let trusted = ctx.raw_html_allowed();
    if !trusted && jsx::is_scripting_tag(name) {
        log::debug!("<{name}> needs allowRawHtml, rendering its children as text");
        render_children(children, ctx);
        return;
    }

    ctx.push_raw("<");
    ctx.push_raw(name);
    for (attr, value) in attrs.iter() {
        let attr = if attr == "className" { "class" } else { attr };
        if !trusted && jsx::is_scripting_attr(attr, value) {
            log::debug!("dropping scripting attribute {attr} on <{name}>");
            continue;
        }
        match value {
            AttrValue::Literal(value) => ctx.push_attr(attr, value),
            AttrValue::Flag => {
                ctx.push_raw(" ");
                ctx.push_raw(attr);
            }
            AttrValue::Expression(expr) => {
                log::debug!("dropping expression attribute {attr}={{{expr}}} on <{name}>");
            }
        }
    }
    if jsx::is_void_tag(name) {
        ctx.push_raw(" />");
        return;
    }
    ctx.push_raw(">");
    render_children(children, ctx);
    ctx.close(name);
}

#[cfg(test)]
mod tests {
    use super::super::{Options, render_markdown, render_markdown_with};
    use crate::components::PlainImage;
    use crate::registry::ComponentRegistry;

    fn html(source: &str) -> String {
        render_markdown(source, &Options::default()).unwrap().html
    }

    #[test]
    fn tight_list_items_have_no_paragraphs() {
        let out = html("- one\n- two\n");
        assert!(out.contains("folio-list"));
        assert!(!out.contains("<p"));
    }

    #[test]
    fn ordered_lists_stay_plain() {
        let out = html("3. three\n4. four\n");
        assert!(out.starts_with("<ol start=\"3\">"));
    }

    #[test]
    fn task_items_render_checkboxes() {
        let out = html("- [x] done\n- [ ] open\n");
        assert_eq!(out.matches("<input type=\"checkbox\"").count(), 2);
        assert_eq!(out.matches(" checked").count(), 1);
        assert_eq!(out.matches(" disabled").count(), 2);
    }

    #[test]
    fn scripting_html_needs_raw_html() {
        let source = "<section onclick=\"steal()\" class=\"box\">\n<script>alert(1)</script>\n<img src=\"javascript:alert(1)\" alt=\"x\" />\n</section>\n";
        let out = html(source);
        assert!(!out.contains("onclick"), "{out}");
        assert!(!out.contains("<script"), "{out}");
        assert!(!out.contains("javascript:"), "{out}");
        assert!(out.contains("<section class=\"box\">"), "{out}");
        assert!(out.contains("alt=\"x\""), "{out}");
    }

    #[test]
    fn reference_links_use_the_link_component() {
        let out = html("See [about][A] and [home].\n\n[a]: /about \"About\"\n[home]: https://example.com\n");
        assert!(out.contains("href=\"/about\""));
        assert!(out.contains("title=\"About\""));
        assert!(out.contains("data-internal"));
        assert!(out.contains("href=\"https://example.com\""));
        assert!(out.contains("target=\"_blank\""));
        assert!(!out.contains("[a]:"));
    }

    #[test]
    fn reference_images_reach_the_provider() {
        let out = html("![cat][c]\n\n[c]: /cat.png\n");
        assert!(out.contains("<img src=\"/cat.png\" alt=\"cat\""), "{out}");
    }

    #[test]
    fn repeated_heading_text_never_repeats_an_id() {
        let doc = render_markdown("# Foo\n\n# Foo 1\n\n# Foo\n", &Options::default()).unwrap();
        let slugs: Vec<_> = doc.headings.iter().map(|h| h.slug.as_str()).collect();
        assert_eq!(slugs, ["foo", "foo-1", "foo-2"]);
    }

    #[test]
    fn headings_get_slugs_and_toc_entries() {
        let source = "# Hello World\n\n## Hello World\n\n### Setup {#install}\n";
        let doc = render_markdown(source, &Options::default()).unwrap();
        let slugs: Vec<_> = doc.headings.iter().map(|h| h.slug.as_str()).collect();
        assert_eq!(slugs, ["hello-world", "hello-world-1", "install"]);
        assert_eq!(doc.headings[2].text, "Setup");
        assert!(doc.html.contains("id=\"install\""));
        assert!(!doc.html.contains("{#install}"));
    }

    #[test]
    fn heading_autolink_goes_through_link_component() {
        let out = html("## Intro\n");
        assert!(out.contains("href=\"#intro\""));
        assert!(out.contains("data-internal"));

        let options = Options {
            enable_heading_autolinks: false,
            ..Options::default()
        };
        let out = render_markdown("## Intro\n", &options).unwrap().html;
        assert!(!out.contains("<a"));
    }

    #[test]
    fn headings_with_links_are_not_autolinked() {
        let out = html("## See [docs](https://example.com)\n");
        assert_eq!(out.matches("<a").count(), 1);
    }

    #[test]
    fn code_title_precedes_code_block() {
        let out = html("```js:app.js\nlet a = 1 < 2;\n```\n");
        let title = out.find("remark-code-title").unwrap();
        let pre = out.find("<pre").unwrap();
        assert!(title < pre);
        assert!(out.contains(">app.js</div>"));
        assert!(out.contains("folio-code language-js"));
        assert!(out.contains("let a = 1 &lt; 2;"));
    }

    #[test]
    fn raw_html_links_get_link_treatment() {
        let options = Options {
            allow_raw_html: true,
            ..Options::default()
        };
        let out = render_markdown("<a href=\"/about\">about</a>\n", &options).unwrap().html;
        assert!(out.contains("data-internal"));
    }

    #[test]
    fn lowercase_jsx_passes_through() {
        let out = html("<section className=\"intro\" hidden>\nhi\n</section>\n");
        assert!(out.starts_with("<section class=\"intro\" hidden>"));
        assert!(out.ends_with("</section>"));
    }

    #[test]
    fn unknown_components_render_children_with_warning() {
        let doc = render_markdown("<Tweet>\n\nhello\n\n</Tweet>\n", &Options::default()).unwrap();
        assert!(doc.html.contains("hello"));
        assert!(!doc.html.contains("Tweet"));
        assert_eq!(doc.diagnostics.count(), 1);
    }

    #[test]
    fn empty_registry_renders_plain_html() {
        let doc = render_markdown_with(
            "Some [text](/x).\n",
            &Options::default(),
            &ComponentRegistry::empty(),
            &PlainImage,
        )
        .unwrap();
        assert_eq!(doc.html, "<p>Some <a href=\"/x\">text</a>.</p>");
    }

    #[test]
    fn footnotes_collect_at_end() {
        let out = html("Claim[^a].\n\n[^a]: Source.\n");
        assert!(out.contains("href=\"#fn-a\""));
        assert!(out.contains("<section class=\"footnotes\" data-footnotes><ol><li id=\"fn-a\">"));
    }
}
