//! The two-valued light/dark presentation setting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current colour mode of the page being rendered.
///
/// Renderers never read this from global state; it travels down the render
/// call chain inside the render context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ColorMode {
    /// Picks the value paired with the current mode.
    ///
    /// ```
    /// use folio_core::ColorMode;
    ///
    /// assert_eq!(ColorMode::Light.value("gray.600", "gray.400"), "gray.600");
    /// assert_eq!(ColorMode::Dark.value("gray.600", "gray.400"), "gray.400");
    /// ```
    pub fn value<T>(self, light: T, dark: T) -> T {
        match self {
            ColorMode::Light => light,
            ColorMode::Dark => dark,
        }
    }

    /// Mode name as used in class names and the public API.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub fn inverse(self) -> Self {
        self.value(ColorMode::Dark, ColorMode::Light)
    }

    /// Mode name for text drawn on the current background, i.e. `"dark"`
    /// in light mode and `"light"` in dark mode.
    pub fn text_color_mode(self) -> &'static str {
        self.inverse().as_str()
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_color_mode_is_inverted() {
        assert_eq!(ColorMode::Light.text_color_mode(), "dark");
        assert_eq!(ColorMode::Dark.text_color_mode(), "light");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let mode: ColorMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ColorMode::Dark);
        assert_eq!(serde_json::to_string(&ColorMode::Light).unwrap(), "\"light\"");
    }
}
