//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes are TOML files: two built-in Catppuccin variants compiled
//! into the plugin, or a custom file named in the plugin configuration.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#cba6f7"
//! accent = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! chip_fg = "#cdd6f4"
//! chip_bg = "#313244"
//! trigger_fg = "#1e1e2e"
//! trigger_bg = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use askbar::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "catppuccin-latte");
//! ```

use crate::domain::{AskbarError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Panel title / submitted query.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Placeholders, footer, secondary info.
    pub text_dim: String,

    /// Panel frame and separators.
    pub border: String,
    pub search_bar_border: String,

    /// Animation word, loading text, buttons.
    pub accent: String,

    /// Typed-prefix highlight in autocomplete rows.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Quick-pick suggestion chips.
    pub chip_fg: String,
    pub chip_bg: String,

    /// Collapsed trigger button.
    pub trigger_fg: String,
    pub trigger_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Parameters
    ///
    /// - `name`: `catppuccin-mocha` or `catppuccin-latte`
    ///
    /// # Returns
    ///
    /// The parsed theme, or `None` for an unknown name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use askbar::ui::Theme;
    ///
    /// assert!(Theme::from_name("catppuccin-mocha").is_some());
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Parameters
    ///
    /// - `path`: Location of the theme file (no tilde expansion)
    ///
    /// # Returns
    ///
    /// The theme described by the file.
    ///
    /// # Errors
    ///
    /// Returns [`AskbarError::Io`] if the file cannot be read and
    /// [`AskbarError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| AskbarError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    ///
    /// # Parameters
    ///
    /// - `hex`: Color as `#rrggbb`; anything unparseable renders white
    ///
    /// # Example
    ///
    /// ```rust
    /// use askbar::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#cba6f7"), "\u{1b}[38;2;203;166;247m");
    /// assert_eq!(Theme::fg("oops"), "\u{1b}[38;2;255;255;255m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    ///
    /// # Parameters
    ///
    /// - `hex`: Color as `#rrggbb`; anything unparseable renders white
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI italic escape sequence.
    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling (colors, bold, italic, etc.).
    ///
    /// # Example
    ///
    /// ```rust
    /// use askbar::ui::Theme;
    ///
    /// let styled = format!("{}{}ask{}", Theme::bold(), Theme::fg("#89b4fa"), Theme::reset());
    /// assert!(styled.ends_with("\u{1b}[0m"));
    /// ```
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert!(Theme::from_name("catppuccin-latte").is_some());
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_escape_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = toml::to_string(&Theme::default()).unwrap();
        let custom = mocha.replace("catppuccin-mocha", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(AskbarError::Theme(_))));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Theme::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(AskbarError::Io(_))));
    }
}
