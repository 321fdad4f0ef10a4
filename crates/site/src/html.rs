//! HTML string building with escaping.

use crate::style::Style;

/// Append-only HTML buffer.
///
/// Text and attribute values are escaped on the way in; tags are written raw.
#[derive(Debug, Default, Clone)]
pub struct HtmlBuf {
    buf: String,
}

impl HtmlBuf {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Writes markup verbatim.
    pub fn push_raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Writes escaped text content.
    pub fn push_text(&mut self, s: &str) {
        html_escape::encode_text_to_string(s, &mut self.buf);
    }

    /// Writes an escaped attribute value (no quotes).
    pub fn push_attr_value(&mut self, s: &str) {
        html_escape::encode_double_quoted_attribute_to_string(s, &mut self.buf);
    }

    /// Writes ` name="value"`.
    pub fn push_attr(&mut self, name: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.push_attr_value(value);
        self.buf.push('"');
    }

    /// Writes ` style="…"` unless the style is empty.
    pub fn push_style(&mut self, style: &Style) {
        if !style.is_empty() {
            self.push_attr("style", &style.to_string());
        }
    }

    /// Writes `<tag class="…" style="…">`, omitting empty attributes.
    pub fn open(&mut self, tag: &str, class: &str, style: &Style) {
        self.buf.push('<');
        self.buf.push_str(tag);
        if !class.is_empty() {
            self.push_attr("class", class);
        }
        self.push_style(style);
        self.buf.push('>');
    }

    /// Writes `</tag>`.
    pub fn close(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// The HTML written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the buffer.
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Joins class names, skipping empty ones.
pub fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attributes() {
        let mut html = HtmlBuf::new();
        html.push_raw("<a");
        html.push_attr("title", "\"quoted\" & <b>");
        html.push_raw(">");
        html.push_text("1 < 2 & 3");
        html.close("a");
        assert_eq!(
            html.as_str(),
            "<a title=\"&quot;quoted&quot; &amp; &lt;b&gt;\">1 &lt; 2 &amp; 3</a>"
        );
    }

    #[test]
    fn open_skips_empty_attributes() {
        let mut html = HtmlBuf::new();
        html.open("div", "", &Style::new());
        assert_eq!(html.as_str(), "<div>");
    }

    #[test]
    fn class_list_drops_blanks() {
        assert_eq!(class_list(["a", " ", "b "]), "a b");
    }
}
