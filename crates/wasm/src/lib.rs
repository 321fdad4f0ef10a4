//! WebAssembly bindings for rendering posts, the site header and the global
//! stylesheet in the browser or at the edge.

use folio_core::{ColorMode, PostMeta};
use folio_site::{HeadingEntry, MDX_COMPONENTS, Options, SiteConfig};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Render result returned to JavaScript.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmRenderedPost {
    /// Rendered body HTML.
    pub html: String,
    /// Frontmatter serialized as a JSON string.
    pub frontmatter_json: String,
    /// Well-known frontmatter fields.
    pub meta: PostMeta,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
    /// Render warnings, formatted with their source location.
    pub warnings: Vec<String>,
}

fn parse_options(config: JsValue) -> Result<Options, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn parse_mode(color_mode: &str) -> Result<ColorMode, JsError> {
    color_mode.parse().map_err(|e: String| JsError::new(&e))
}

/// Renders a post (frontmatter plus MDX body).
#[wasm_bindgen]
pub fn render_post(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(config)?;
    let post = folio_site::render_post(source, &options)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let frontmatter_json = serde_json::to_string(&post.frontmatter)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?;
    let result = WasmRenderedPost {
        html: post.document.html,
        frontmatter_json,
        meta: post.meta,
        headings: post.document.headings,
        warnings: post
            .document
            .diagnostics
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders the site header. `site` may be omitted for the default site.
#[wasm_bindgen]
pub fn render_nav(site: JsValue, color_mode: &str) -> Result<String, JsError> {
    let mode = parse_mode(color_mode)?;
    let site: SiteConfig = if site.is_undefined() || site.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(site)
            .map_err(|e| JsError::new(&format!("Invalid site config: {}", e)))?
    };
    Ok(folio_site::render_nav(&site, mode))
}

/// Renders the work-in-progress placeholder.
#[wasm_bindgen]
pub fn render_wip() -> String {
    folio_site::wip::render()
}

/// Global stylesheet for a colour mode (`"light"` or `"dark"`).
#[wasm_bindgen]
pub fn stylesheet(color_mode: &str) -> Result<String, JsError> {
    Ok(folio_site::stylesheet(parse_mode(color_mode)?))
}

/// `[tag, component]` pairs of the default registry.
#[wasm_bindgen]
pub fn registry_tags() -> js_sys::Array {
    MDX_COMPONENTS
        .tags()
        .into_iter()
        .map(|(tag, component)| {
            js_sys::Array::of2(&JsValue::from_str(tag), &JsValue::from_str(component))
        })
        .collect()
}
