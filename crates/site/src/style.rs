//! Inline style declarations over the theme's CSS custom properties.
//!
//! Components name theme tokens the way the site's component library does
//! (`gray.400`, `2xl`, `5`); the tokens themselves are defined by the host
//! stylesheet as `--chakra-<scale>-<token>` variables.

use std::fmt;

/// Ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.decls.push((property, value.into()));
        self
    }

    /// Adds a declaration when `value` is present.
    pub fn set_opt(self, property: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    /// True when no declaration was added.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Value of the last declaration of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{property}:{value}")?;
        }
        Ok(())
    }
}

/// `gray.400` → `var(--chakra-colors-gray-400)`.
pub fn color(token: &str) -> String {
    token_var("colors", token)
}

/// `5` → `var(--chakra-space-5)`; `4px` passes through.
pub fn space(token: &str) -> String {
    token_var("space", token)
}

/// `2xl` → `var(--chakra-fontSizes-2xl)`.
pub fn font_size(token: &str) -> String {
    token_var("fontSizes", token)
}

/// `semibold` → `var(--chakra-fontWeights-semibold)`.
pub fn font_weight(token: &str) -> String {
    token_var("fontWeights", token)
}

/// `mono` → `var(--chakra-fonts-mono)`.
pub fn font(token: &str) -> String {
    token_var("fonts", token)
}

/// `xl` → `var(--chakra-radii-xl)`.
pub fn radius(token: &str) -> String {
    token_var("radii", token)
}

/// `full` → `100%`; `7xl` → `var(--chakra-sizes-7xl)`.
pub fn size(token: &str) -> String {
    if token == "full" {
        "100%".to_string()
    } else {
        token_var("sizes", token)
    }
}

fn token_var(scale: &str, token: &str) -> String {
    let token = token.trim();
    if is_literal_css(token) {
        return token.to_string();
    }
    format!("var(--chakra-{}-{})", scale, token.replace('.', "-"))
}

/// Plain CSS values (lengths with units, percentages, functions, keywords
/// with hyphens) are used as written.
fn is_literal_css(value: &str) -> bool {
    if value.contains(['%', '(', ' ', '#']) {
        return true;
    }
    let digits = value
        .trim_start_matches('-')
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.');
    let number_prefix = digits.len() < value.len();
    number_prefix
        && !digits.is_empty()
        && matches!(digits, "px" | "em" | "rem" | "vh" | "vw" | "ch" | "fr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_map_to_variables() {
        assert_eq!(color("gray.400"), "var(--chakra-colors-gray-400)");
        assert_eq!(color("black"), "var(--chakra-colors-black)");
        assert_eq!(space("0.5"), "var(--chakra-space-0-5)");
        assert_eq!(font_size("2xl"), "var(--chakra-fontSizes-2xl)");
        assert_eq!(size("7xl"), "var(--chakra-sizes-7xl)");
    }

    #[test]
    fn literal_values_pass_through() {
        assert_eq!(space("4px"), "4px");
        assert_eq!(size("70%"), "70%");
        assert_eq!(size("full"), "100%");
        assert_eq!(size("calc(100% + 28px)"), "calc(100% + 28px)");
        assert_eq!(font_size("1.5rem"), "1.5rem");
    }

    #[test]
    fn display_joins_declarations() {
        let style = Style::new()
            .set("display", "flex")
            .set_opt("gap", None::<String>)
            .set("margin-top", space("5"));
        assert_eq!(style.to_string(), "display:flex;margin-top:var(--chakra-space-5)");
        assert_eq!(style.get("display"), Some("flex"));
    }
}
