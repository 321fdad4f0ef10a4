//! YAML frontmatter of blog posts.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Frontmatter split off the top of a post.
#[derive(Debug)]
pub struct Frontmatter {
    /// Parsed frontmatter as a JSON object (empty when the post has none).
    pub value: JsonValue,
    /// Byte offset where the post body begins.
    pub body_start: usize,
}

impl Frontmatter {
    fn empty() -> Self {
        Self {
            value: JsonValue::Object(Default::default()),
            body_start: 0,
        }
    }

    /// Typed view of the well-known post fields.
    ///
    /// Fields of the wrong type are treated as absent.
    pub fn meta(&self) -> PostMeta {
        PostMeta {
            title: self.string_field("title"),
            published_at: self.string_field("publishedAt"),
            summary: self.string_field("summary"),
            image: self.string_field("image"),
        }
    }

    fn string_field(&self, key: &str) -> Option<String> {
        let value = self.value.get(key)?;
        match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                log::debug!("frontmatter field `{key}` is not a string: {value}");
                None
            }
        }
    }
}

/// Well-known frontmatter fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostMeta {
    /// Post title.
    pub title: Option<String>,
    /// Publication date as written (e.g. `2021-03-14`).
    pub published_at: Option<String>,
    /// One-line summary for listings.
    pub summary: Option<String>,
    /// Cover image path.
    pub image: Option<String>,
}

/// Errors emitted while parsing or extracting frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening `---` without a closing one.
    #[error("Unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Splits YAML frontmatter off `input`.
///
/// Leading blank lines and a byte-order mark are skipped. A document whose
/// first non-blank line is not `---` has no frontmatter.
pub fn extract_frontmatter(input: &str) -> Result<Frontmatter, FrontmatterError> {
    let Some((yaml, body_start)) = find_yaml_block(input)? else {
        return Ok(Frontmatter::empty());
    };
    Ok(Frontmatter {
        value: parse_yaml(yaml)?,
        body_start,
    })
}

fn parse_yaml(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    match serde_json::to_value(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))? {
        JsonValue::Null => Ok(JsonValue::Object(Default::default())),
        value @ JsonValue::Object(_) => Ok(value),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

/// Returns the YAML text and the byte offset of the body.
fn find_yaml_block(input: &str) -> Result<Option<(&str, usize)>, FrontmatterError> {
    let bom = if input.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };

    let mut lines = Lines::new(input, bom);
    let opened = loop {
        match lines.next() {
            Some((line, _, _)) if line.trim().is_empty() => continue,
            Some((line, _, end)) if is_fence(line) => break end,
            _ => return Ok(None),
        }
    };

    for (line, start, end) in lines {
        if is_fence(line) {
            let yaml = input[opened..start].trim_end_matches(['\r', '\n']);
            return Ok(Some((yaml, end)));
        }
    }
    Err(FrontmatterError::Unterminated)
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

/// Lines of a string with their start offset and the offset just past
/// their newline.
struct Lines<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str, cursor: usize) -> Self {
        Self { input, cursor }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (&'a str, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.input.len() {
            return None;
        }
        let start = self.cursor;
        let rest = &self.input[start..];
        let (line, end) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], start + pos + 1),
            None => (rest, self.input.len()),
        };
        self.cursor = end;
        Some((line, start, end))
    }
}
