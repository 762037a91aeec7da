//! Fixed color palette and ANSI escape sequence generation.
//!
//! The palette ships as a TOML file embedded in the binary. There is exactly
//! one built-in palette; the plugin does not load user themes.
//!
//! # TOML Format
//!
//! ```toml
//! name = "lorekeeper"
//!
//! [colors]
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! header_fg = "#cdd6f4"
//! border = "#45475a"
//! prompt_fg = "#f5c2e7"
//! highlight = "#f9e2af"
//! selected_fg = "#ffffff"
//! selected_bg = "#313244"
//! selected_highlight = "#fab387"
//! heading_fg = "#89b4fa"
//! subheading_fg = "#94e2d5"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::error::{LorekeeperError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_PALETTE: &str = include_str!("../../themes/default.toml");

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb` (the `#` is optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::ui::theme::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb(255, 128, 0)));
    /// assert_eq!(Rgb::from_hex("nope"), None);
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self(r, g, b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid hex color: {value}"))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
    }
}

/// The palette used for every UI element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Result names and detail paragraphs.
    pub text_normal: Rgb,
    /// Footer hints and secondary detail lines.
    pub text_dim: Rgb,
    pub header_fg: Rgb,
    /// Pane borders and dividers.
    pub border: Rgb,
    /// The `>` query prompt.
    pub prompt_fg: Rgb,

    /// Foreground of matched characters in an unselected row.
    pub highlight: Rgb,
    /// Foreground of unmatched characters in the selected row.
    pub selected_fg: Rgb,
    /// Background of the selected row and the list gutter.
    pub selected_bg: Rgb,
    /// Foreground of matched characters in the selected row.
    pub selected_highlight: Rgb,

    /// `# ` lines in detail text.
    pub heading_fg: Rgb,
    /// `## ` lines in detail text.
    pub subheading_fg: Rgb,

    pub empty_state_fg: Rgb,
}

impl Theme {
    /// Parses a palette from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`LorekeeperError::Theme`] if the TOML is malformed, a field is
    /// missing, or a color is not a `#rrggbb` value.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| LorekeeperError::Theme(format!("failed to parse palette: {e}")))
    }

    /// ANSI 24-bit foreground sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in palette.
    ///
    /// # Panics
    ///
    /// Panics if the embedded palette fails to parse, which the unit tests
    /// below rule out.
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("embedded palette should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_palette_parses() {
        let theme = Theme::from_toml(DEFAULT_PALETTE).unwrap();
        assert_eq!(theme.name, "lorekeeper");
        assert_ne!(theme.colors.highlight, theme.colors.selected_highlight);
    }

    #[test]
    fn rejects_bad_colors() {
        let broken = DEFAULT_PALETTE.replace("#f9e2af", "yellow");
        assert!(matches!(Theme::from_toml(&broken), Err(LorekeeperError::Theme(_))));
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg(Rgb(1, 2, 3)), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg(Rgb(4, 5, 6)), "\u{1b}[48;2;4;5;6m");
    }
}
