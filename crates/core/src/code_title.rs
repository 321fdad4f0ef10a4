//! Code-title annotations on fenced code blocks.
//!
//! A fence opened as ```` ```rust:src/main.rs ```` carries the language
//! `rust` and the title `src/main.rs`. The renderer emits the title as a
//! `div` with [`CODE_TITLE_CLASS`] right before the block.

/// Class marking a code-title `div`.
pub const CODE_TITLE_CLASS: &str = "remark-code-title";

/// Language and optional title of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTitle<'a> {
    /// Language identifier, if any remains after removing the title.
    pub lang: Option<&'a str>,
    /// Title text after the first `:`.
    pub title: Option<&'a str>,
}

/// Splits a fence info string's language part at the first `:`.
///
/// ```
/// use folio_core::code_title::split_code_title;
///
/// let parsed = split_code_title("js:app.js");
/// assert_eq!(parsed.lang, Some("js"));
/// assert_eq!(parsed.title, Some("app.js"));
/// ```
pub fn split_code_title(lang: &str) -> CodeTitle<'_> {
    match lang.split_once(':') {
        Some((lang, title)) => CodeTitle {
            lang: non_empty(lang),
            title: non_empty(title),
        },
        None => CodeTitle {
            lang: non_empty(lang),
            title: None,
        },
    }
}

/// Returns true when a class list contains the code-title marker.
pub fn is_code_title_class(class_name: &str) -> bool {
    class_name
        .split_ascii_whitespace()
        .any(|class| class == CODE_TITLE_CLASS)
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
