use ratatui::style::Color;

use crate::theme;

/// Named tones the grid paints with
///
/// Supplied explicitly by the caller instead of read from a global theme, so
/// the same grid can be hosted under any color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Text of selected rows
    pub font: Color,
    /// Text and checkbox of enabled, unselected rows
    pub font_dark: Color,
    /// Text of disabled rows
    pub font_darkest: Color,
    /// Background of selected rows
    pub background_light: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            font: theme::grid::FONT,
            font_dark: theme::grid::FONT_DARK,
            font_darkest: theme::grid::FONT_DARKEST,
            background_light: theme::grid::BACKGROUND_LIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Columns between the name and the data value
    pub data_gap: u16,
    /// Keep the full name of every row in the rendered output, so hosts can
    /// show it for elided names (status line, screen reader, ...)
    pub full_name_label: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            data_gap: 1,
            full_name_label: true,
        }
    }
}
