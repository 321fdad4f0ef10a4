//! Heading slugs compatible with the ids the blog's `rehype-slug` step produced.

use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Splits a trailing `{#custom-id}` off heading text.
///
/// Ids are limited to ASCII alphanumerics, `-` and `_`. Anything else leaves
/// the text untouched.
///
/// ```
/// use folio_core::slug::extract_custom_id;
///
/// assert_eq!(extract_custom_id("Setup {#setup}"), ("Setup", Some("setup")));
/// assert_eq!(extract_custom_id("Setup"), ("Setup", None));
/// ```
pub fn extract_custom_id(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim_end();
    let Some(inner) = trimmed.strip_suffix('}') else {
        return (text, None);
    };
    let Some(open) = inner.rfind("{#") else {
        return (text, None);
    };

    let id = &inner[open + 2..];
    let valid = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        (inner[..open].trim_end(), Some(id))
    } else {
        (text, None)
    }
}

/// Hands out unique slugs for the headings of one document.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Creates an empty slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slug for `text`, suffixing `-1`, `-2`, … until the result
    /// is unused.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        while self.seen.contains_key(&slug) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }

    /// Marks `slug` as taken so generated slugs never collide with it.
    pub fn reserve(&mut self, slug: &str) {
        self.seen.entry(slug.to_string()).or_insert(0);
    }
}

/// Lowercases `text`, keeps letters, digits, combining marks, `-` and `_`,
/// turns spaces into hyphens and drops everything else. Runs of hyphens are
/// not collapsed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == ' ' {
            slug.push('-');
        } else if ch == '-' || ch == '_' || ch.is_alphanumeric() || is_combining_mark(ch) {
            slug.extend(ch.to_lowercase());
        }
    }

    if slug.is_empty() {
        slug.push_str("heading");
    }
    slug
}

/// Nonspacing and spacing marks (Mn, Mc, Me) of the scripts headings are
/// written in. `char::is_alphanumeric` rejects them.
fn is_combining_mark(ch: char) -> bool {
    const RANGES: &[RangeInclusive<u32>] = &[
        0x0300..=0x036F,
        0x0483..=0x0489,
        0x0591..=0x05BD,
        0x05BF..=0x05BF,
        0x05C1..=0x05C2,
        0x05C4..=0x05C5,
        0x05C7..=0x05C7,
        0x0610..=0x061A,
        0x064B..=0x065F,
        0x0670..=0x0670,
        // Devanagari
        0x0900..=0x0903,
        0x093A..=0x094F,
        0x0951..=0x0957,
        0x0962..=0x0963,
        // Bengali, Gurmukhi, Gujarati, Tamil
        0x0981..=0x0983,
        0x09BC..=0x09CD,
        0x0A01..=0x0A03,
        0x0A3C..=0x0A4D,
        0x0A81..=0x0A83,
        0x0ABC..=0x0ACD,
        0x0B82..=0x0B83,
        0x0BBE..=0x0BCD,
        // Thai
        0x0E31..=0x0E31,
        0x0E34..=0x0E3A,
        0x0E47..=0x0E4E,
        0x1AB0..=0x1AFF,
        0x1DC0..=0x1DFF,
        0x302A..=0x302F,
        0x3099..=0x309A,
        0xFE20..=0xFE2F,
    ];

    let cp = u32::from(ch);
    RANGES.iter().any(|range| range.contains(&cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's new in v2.0?"), "whats-new-in-v20");
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(slugify("Café Crème"), "café-crème");
    }

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(slugify("!!!"), "heading");
    }

    #[test]
    fn repeats_are_suffixed() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Intro"), "intro");
        assert_eq!(slugger.next_slug("Intro"), "intro-1");
        assert_eq!(slugger.next_slug("Intro"), "intro-2");
    }

    #[test]
    fn reserved_slug_is_skipped() {
        let mut slugger = Slugger::new();
        slugger.reserve("setup");
        assert_eq!(slugger.next_slug("Setup"), "setup-1");
    }

    #[test]
    fn suffixed_slug_never_repeats_an_earlier_heading() {
        let mut slugger = Slugger::new();
        let slugs: Vec<_> = ["Foo", "Foo 1", "Foo"]
            .into_iter()
            .map(|text| slugger.next_slug(text))
            .collect();
        assert_eq!(slugs, ["foo", "foo-1", "foo-2"]);
    }

    #[test]
    fn reserved_suffix_is_skipped() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Setup"), "setup");
        slugger.reserve("setup-1");
        assert_eq!(slugger.next_slug("Setup"), "setup-2");
    }

    #[test]
    fn combining_marks_survive() {
        assert_eq!(slugify("हिन्दी"), "हिन्दी");
        assert_eq!(slugify("สวัสดี"), "สวัสดี");
    }

    #[test]
    fn custom_id_rejects_bad_characters() {
        assert_eq!(extract_custom_id("Title {#a b}"), ("Title {#a b}", None));
        assert_eq!(extract_custom_id("Title {#}"), ("Title {#}", None));
        assert_eq!(
            extract_custom_id("Title {#my_id}  "),
            ("Title", Some("my_id"))
        );
    }
}
