//! Global stylesheet the components rely on.
//!
//! Inline styles cover everything per element; what needs selectors
//! (pseudo-elements, hover, media queries, syntax-highlighting tokens) lives
//! here.

use crate::style;
use folio_core::ColorMode;

/// Colour of one group of highlighted token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRule {
    /// Selectors, relative to the code element.
    pub selectors: &'static [&'static str],
    /// Colour token.
    pub color: &'static str,
}

const COMMENTS: &[&str] = &[
    ".token.comment",
    ".token.prolog",
    ".token.doctype",
    ".token.cdata",
    ".token.punctuation",
];
const KEYWORDS: &[&str] = &[".token.atrule", ".token.attr-value", ".token.keyword"];
const STRINGS: &[&str] = &[
    ".token.selector",
    ".token.attr-name",
    ".token.string",
    ".token.char",
    ".token.builtin",
    ".token.inserted",
];
const FUNCTIONS: &[&str] = &[".token.function", ".token.class-name"];
const LITERALS: &[&str] = &[
    ".token.property",
    ".token.tag",
    ".token.boolean",
    ".token.number",
    ".token.constant",
    ".token.symbol",
    ".token.deleted",
];

/// Rules shared by both modes.
pub const COMMON_TOKENS: &[TokenRule] = &[
    TokenRule {
        selectors: &[
            ".token.operator",
            ".token.entity",
            ".token.url",
            ".language-css .token.string",
            ".style .token.string",
        ],
        color: "yellow.500",
    },
    TokenRule {
        selectors: &[".token.regex", ".token.important", ".token.variable"],
        color: "yellow.500",
    },
];

/// Light-mode token colours.
pub const LIGHT_TOKENS: &[TokenRule] = &[
    TokenRule {
        selectors: COMMENTS,
        color: "gray.700",
    },
    TokenRule {
        selectors: KEYWORDS,
        color: "pink.600",
    },
    TokenRule {
        selectors: STRINGS,
        color: "blue.600",
    },
    TokenRule {
        selectors: FUNCTIONS,
        color: "brand.600",
    },
    TokenRule {
        selectors: LITERALS,
        color: "purple.600",
    },
];

/// Dark-mode token colours.
pub const DARK_TOKENS: &[TokenRule] = &[
    TokenRule {
        selectors: COMMENTS,
        color: "gray.300",
    },
    TokenRule {
        selectors: KEYWORDS,
        color: "pink.300",
    },
    TokenRule {
        selectors: STRINGS,
        color: "blue.300",
    },
    TokenRule {
        selectors: FUNCTIONS,
        color: "brand.300",
    },
    TokenRule {
        selectors: LITERALS,
        color: "purple.300",
    },
];

/// Token rules in effect for `mode`: the shared set, then the mode's own.
pub fn token_rules(mode: ColorMode) -> impl Iterator<Item = &'static TokenRule> {
    COMMON_TOKENS
        .iter()
        .chain(mode.value(LIGHT_TOKENS, DARK_TOKENS))
}

const BASE: &str = "\
.folio-title{font-size:var(--folio-title-size);position:relative}
@media (min-width:30em){.folio-title{font-size:var(--folio-title-size-sm,var(--folio-title-size))}}
.folio-link--internal::after{content:'#';visibility:hidden;color:var(--folio-link-indicator)}
.folio-link--internal:hover::after{visibility:visible;text-decoration:none}
.folio-link--external:hover{text-decoration:none}
.border{border-radius:var(--chakra-radii-xl)}
.folio-aspect-ratio>img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.folio-list>li+li{margin-top:var(--folio-list-spacing)}
.remark-code-title+.folio-pre{margin-top:0;border-top-left-radius:0;border-top-right-radius:0}
.folio-nav--full{display:none}
@media (min-width:48em){.folio-nav--compact{display:none}.folio-nav--full{display:block}}
.folio-brand::after{transition:all 0.25s ease-in-out;content:'';outline:1px solid transparent;width:0%;height:30%;position:absolute;bottom:var(--chakra-space-1);left:0;background:var(--folio-brand-highlight);z-index:-1}
.folio-brand:hover{color:var(--folio-brand-hover)}
.folio-brand:hover::after{width:100%}
";

/// The stylesheet for `mode`.
///
/// ```
/// use folio_core::ColorMode;
/// use folio_site::theme::stylesheet;
///
/// let css = stylesheet(ColorMode::Dark);
/// assert!(css.contains(".folio-code .token.keyword"));
/// assert!(css.contains("var(--chakra-colors-pink-300)"));
/// ```
pub fn stylesheet(mode: ColorMode) -> String {
    let mut css = String::from(BASE);
    for rule in token_rules(mode) {
        let selectors = rule
            .selectors
            .iter()
            .map(|selector| format!(".folio-code {selector}"))
            .collect::<Vec<_>>()
            .join(",");
        css.push_str(&format!(
            "{selectors}{{color:{}}}\n",
            style::color(rule.color)
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tables_cover_the_same_groups() {
        let light: Vec<_> = LIGHT_TOKENS.iter().map(|r| r.selectors).collect();
        let dark: Vec<_> = DARK_TOKENS.iter().map(|r| r.selectors).collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn shared_rules_appear_in_both_modes() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let css = stylesheet(mode);
            assert!(css.contains(".folio-code .token.regex"));
            assert!(css.contains("var(--chakra-colors-yellow-500)"));
        }
    }

    #[test]
    fn keyword_colour_differs_by_mode() {
        let light = stylesheet(ColorMode::Light);
        let dark = stylesheet(ColorMode::Dark);
        assert!(light.contains(".folio-code .token.keyword{color:var(--chakra-colors-pink-600)}"));
        assert!(dark.contains(".folio-code .token.keyword{color:var(--chakra-colors-pink-300)}"));
    }

    #[test]
    fn nav_variants_switch_at_md() {
        let css = stylesheet(ColorMode::Light);
        assert!(css.contains("@media (min-width:48em){.folio-nav--compact{display:none}"));
    }
}
