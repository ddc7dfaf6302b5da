//! Centralized theme configuration for the grid and the picker.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::error::CheckgridError;

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Selection grid tones (the palette contract consumed by `grid::Palette`)
pub mod grid {
    use super::*;

    pub const FONT: Color = palette::TEXT;
    pub const FONT_DARK: Color = palette::TEXT_MUTED;
    pub const FONT_DARKEST: Color = palette::TEXT_DIM;
    pub const BACKGROUND_LIGHT: Color = palette::BG_HIGHLIGHT;

    pub const CHECKED: &str = "[x] ";
    pub const UNCHECKED: &str = "[ ] ";
    pub const ELLIPSIS: &str = "…";

    /// Entry colors handed out in order when a source does not name one
    pub const ENTRY_COLORS: &[Color] = &[
        palette::PINK,
        palette::CYAN,
        palette::GREEN,
        palette::ORANGE,
        palette::PURPLE,
        palette::YELLOW,
        palette::MAGENTA,
        palette::RED,
    ];

    pub const DEFAULT_ENTRY_COLOR: Color = palette::CYAN;
}

/// Picker window styles
pub mod picker {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const SCROLLBAR: Color = palette::CYAN;
    pub const TITLE: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);

    pub const CURSOR: &str = "► ";
    pub const CURSOR_FG: Color = palette::PINK;

    // Status line
    pub const FULL_NAME: Color = palette::TEXT_MUTED;
    pub const WARNING: Color = palette::YELLOW;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}

/// Parse a color token into a terminal color
///
/// Accepts `#rgb`, `#rrggbb`, any color name ratatui understands
/// (`red`, `lightblue`, `dark-gray`, ...) and 0-255 indexed colors.
pub fn parse_color(token: &str) -> Result<Color, CheckgridError> {
    let token = token.trim();

    // ratatui only understands the six digit form
    let candidate = match token.strip_prefix('#') {
        Some(hex) if hex.len() == 3 && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            format!("#{}", hex.chars().flat_map(|c| [c, c]).collect::<String>())
        }
        _ => token.to_string(),
    };

    Color::from_str(&candidate).map_err(|_| CheckgridError::InvalidColor(token.to_string()))
}

/// Serde adapter for color tokens in entry files
pub fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let token = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse_color(&token).map_err(serde::de::Error::custom)
}

pub fn default_entry_color() -> Color {
    grid::DEFAULT_ENTRY_COLOR
}
