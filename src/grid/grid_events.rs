//! Selection grid activation
//!
//! Every successful activation calls the toggle handler exactly once with a
//! copy of the entry whose `selected` flag is flipped. Nothing is applied
//! locally; the caller merges the copy and renders again.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::rendered::{RenderedGrid, RenderedRow};
use super::selection_grid::SelectionGrid;

impl<D: Clone> SelectionGrid<'_, D> {
    /// Activate the control under `position`, if any
    ///
    /// Returns true when the toggle handler was called.
    pub fn activate_at(&mut self, rendered: &RenderedGrid, position: Position) -> bool {
        match rendered.control_at(position).and_then(|index| rendered.row(index)) {
            Some(row) => self.emit_toggle(row),
            None => false,
        }
    }

    /// Activate the control of the entry at `index`
    ///
    /// Rows rendered without a control (disabled, or outside the viewport)
    /// cannot be activated.
    pub fn activate_row(&mut self, rendered: &RenderedGrid, index: usize) -> bool {
        match rendered.row(index).filter(|row| row.has_control()) {
            Some(row) => self.emit_toggle(row),
            None => false,
        }
    }

    fn emit_toggle(&mut self, row: &RenderedRow) -> bool {
        let entries = self.entries;
        let Some(entry) = entries.get(row.index) else {
            return false;
        };

        // Geometry may come from an older paint: the list can have been
        // reordered, or the entry disabled, since then
        if entry.name != row.name || entry.disabled {
            return false;
        }

        let Some(on_toggle) = self.on_toggle.as_mut() else {
            return false;
        };

        #[cfg(debug_assertions)]
        log::debug!("toggle '{}' -> selected={}", entry.name, !entry.selected);

        on_toggle(entry.toggled());
        true
    }
}

/// Toggle the entry under a left click
pub fn handle_mouse<D: Clone>(
    grid: &mut SelectionGrid<'_, D>,
    rendered: &RenderedGrid,
    mouse: MouseEvent,
) -> bool {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            grid.activate_at(rendered, Position::new(mouse.column, mouse.row))
        }
        _ => false,
    }
}

/// Toggle the entry at `cursor` on Space
pub fn handle_key<D: Clone>(
    grid: &mut SelectionGrid<'_, D>,
    rendered: &RenderedGrid,
    cursor: usize,
    key: KeyEvent,
) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Char(' ') => grid.activate_row(rendered, cursor),
        _ => false,
    }
}
