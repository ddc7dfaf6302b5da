//! Selection grid rendering

use std::fmt::Display;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::CONTROL_WIDTH;
use super::label;
use super::rendered::{RenderedGrid, RenderedRow};
use super::selection_grid::SelectionGrid;
use crate::entry::Entry;
use crate::theme;

impl<D: Display> SelectionGrid<'_, D> {
    /// Paint the rows into `buf` and return where they landed
    ///
    /// One row per entry starting at the grid offset; entries past the bottom
    /// of `area` are reported but not painted.
    pub fn render_rows(&self, area: Rect, buf: &mut Buffer) -> RenderedGrid {
        let area = area.intersection(buf.area);
        let mut rows = Vec::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            let row_area = index
                .checked_sub(self.offset)
                .filter(|visible| *visible < area.height as usize)
                .map(|visible| Rect {
                    x: area.x,
                    y: area.y + visible as u16,
                    width: area.width,
                    height: 1,
                });

            let elided = match row_area {
                Some(row_area) => self.render_row(entry, row_area, buf),
                None => false,
            };

            rows.push(RenderedRow {
                index,
                name: entry.name.clone(),
                area: row_area,
                control: row_area.filter(|_| entry.is_interactive()),
                elided,
                label: self.options.full_name_label.then(|| entry.name.clone()),
            });
        }

        RenderedGrid { rows }
    }

    /// Returns whether the name had to be elided
    fn render_row(&self, entry: &Entry<D>, area: Rect, buf: &mut Buffer) -> bool {
        let data = entry.data.to_string();
        let gap = self.options.data_gap;
        let label_width = (area.width as usize)
            .saturating_sub(CONTROL_WIDTH as usize + gap as usize + data.width());
        let (name, elided) = label::elide(&entry.name, label_width);

        let (control, text_style) = if entry.disabled {
            (None, Style::default().fg(self.palette.font_darkest))
        } else if entry.selected {
            buf.set_style(area, Style::default().bg(self.palette.background_light));
            (
                Some((theme::grid::CHECKED, Style::default().fg(entry.color))),
                Style::default().fg(self.palette.font),
            )
        } else {
            (
                Some((theme::grid::UNCHECKED, Style::default().fg(self.palette.font_dark))),
                Style::default().fg(self.palette.font_dark),
            )
        };

        let right = area.right();
        let remaining = |x: u16| right.saturating_sub(x) as usize;

        // Disabled rows keep the control columns blank so names stay aligned
        if let Some((glyph, style)) = control {
            buf.set_stringn(area.x, area.y, glyph, area.width as usize, style);
        }

        let name_x = area.x.saturating_add(CONTROL_WIDTH).min(right);
        let (after_name, _) = buf.set_stringn(name_x, area.y, &name, remaining(name_x), text_style);

        let data_x = after_name.saturating_add(gap).min(right);
        buf.set_stringn(data_x, area.y, &data, remaining(data_x), text_style);

        elided
    }
}

impl<D: Display> Widget for &SelectionGrid<'_, D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_rows(area, buf);
    }
}

/// Render the grid into a frame
///
/// Returns the row geometry for click resolution.
pub fn render_grid<D: Display>(
    frame: &mut Frame,
    area: Rect,
    grid: &SelectionGrid<'_, D>,
) -> RenderedGrid {
    grid.render_rows(area, frame.buffer_mut())
}
