use folio_wasm::{registry_tags, render_nav, render_post, render_wip, stylesheet};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RenderedPost {
    html: String,
    frontmatter_json: String,
    headings: Vec<HeadingEntry>,
    warnings: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct HeadingEntry {
    depth: u8,
    slug: String,
    text: String,
}

fn render(source: &str) -> RenderedPost {
    let result = render_post(source, JsValue::UNDEFINED).expect("render should succeed");
    serde_wasm_bindgen::from_value(result).expect("deserialize result")
}

#[wasm_bindgen_test]
fn render_basic_post() {
    let result = render("# Hello World\n\nSee [the blog](/blog).");

    assert!(result.html.contains("folio-title"));
    assert!(result.html.contains("data-internal"));
    assert_eq!(result.headings.len(), 1);
    assert_eq!(result.headings[0].depth, 1);
    assert_eq!(result.headings[0].slug, "hello-world");
    assert_eq!(result.headings[0].text, "Hello World");
    assert_eq!(result.frontmatter_json, "{}");
    assert!(result.warnings.is_empty());
}

#[wasm_bindgen_test]
fn render_with_frontmatter() {
    let result = render("---\ntitle: My Post\n---\n\nBody");
    assert!(result.frontmatter_json.contains("My Post"));
    assert!(result.html.contains("Body"));
}

#[wasm_bindgen_test]
fn warnings_are_reported() {
    let result = render("<Image src=\"/a.png\" alt=\"a\" ratio=\"wide\" />");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("wide"));
}

#[wasm_bindgen_test]
fn dark_mode_option() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Config {
        color_mode: &'static str,
    }

    let config = serde_wasm_bindgen::to_value(&Config { color_mode: "dark" })
        .expect("serialize config");
    let result = render_post("[x](https://example.com)", config).expect("render should succeed");
    let result: RenderedPost = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert!(result.html.contains("var(--chakra-colors-blue-200)"));
}

#[wasm_bindgen_test]
fn default_nav() {
    let html = render_nav(JsValue::UNDEFINED, "light").expect("render nav");
    assert!(html.contains("Michael Hall"));
    assert!(html.contains("/bookmarks"));
}

#[wasm_bindgen_test]
fn wip_and_stylesheet() {
    assert!(render_wip().contains("Check back later :)"));
    assert!(stylesheet("dark").expect("stylesheet").contains("pink-300"));
    assert!(stylesheet("sepia").is_err());
}

#[wasm_bindgen_test]
fn registry_has_eighteen_tags() {
    assert_eq!(registry_tags().length(), 18);
}
