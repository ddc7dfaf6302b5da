//! Shared test utilities for checkgrid
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::fmt::Display;

    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::{buffer::Buffer, layout::Rect, style::Color};

    use crate::entry::Entry;
    use crate::grid::{RenderedGrid, SelectionGrid};

    /// Helper to build the entry used throughout the scenarios
    pub fn cat() -> Entry<u64> {
        Entry::new("cat", 12).color(Color::Rgb(255, 0, 0))
    }

    /// Entries with mixed states: unselected, selected, disabled
    pub fn mixed_entries() -> Vec<Entry<u64>> {
        vec![
            Entry::new("cat", 12).color(Color::Rgb(255, 0, 0)),
            Entry::new("dog", 7).color(Color::Rgb(0, 255, 0)).selected(true),
            Entry::new("bird", 0).disabled(true),
        ]
    }

    /// Render a grid into a fresh buffer
    pub fn render_to_buffer<D: Display>(
        grid: &SelectionGrid<'_, D>,
        width: u16,
        height: u16,
    ) -> (Buffer, RenderedGrid) {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        let rendered = grid.render_rows(buf.area, &mut buf);
        (buf, rendered)
    }

    /// Text of one buffer row, trailing blanks removed
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        let line: String = (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect();
        line.trim_end().to_string()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a MouseEvent at a screen position
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }
}
