use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::grid::{self, RenderedGrid, SelectionGrid};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.dismiss_warning();

        let page = self.scroll.viewport_height.max(1) as isize;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.cancel(),
            KeyCode::Char('q') | KeyCode::Esc => self.cancel(),
            KeyCode::Enter => self.confirm(),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor_by(-1),
            KeyCode::PageDown => self.move_cursor_by(page),
            KeyCode::PageUp => self.move_cursor_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.move_cursor_to(0),
            KeyCode::Char('G') | KeyCode::End => self.move_cursor_to(usize::MAX),
            KeyCode::Char('a') => self.set_all(true),
            KeyCode::Char('n') => self.set_all(false),
            _ => {
                let cursor = self.cursor;
                self.toggle_with(|selection, rendered| {
                    grid::handle_key(selection, rendered, cursor, key)
                });
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_cursor_by(1),
            MouseEventKind::ScrollUp => self.move_cursor_by(-1),
            MouseEventKind::Down(_) => {
                let position = Position::new(mouse.column, mouse.row);
                if let Some(index) = self.rendered.row_at(position) {
                    self.move_cursor_to(index);
                }
                self.toggle_with(|selection, rendered| {
                    grid::handle_mouse(selection, rendered, mouse)
                });
            }
            _ => {}
        }
    }

    /// Run one activation against a grid over the current entries and
    /// merge whatever it reports
    fn toggle_with<F>(&mut self, activate: F)
    where
        F: FnOnce(&mut SelectionGrid<'_, u64>, &RenderedGrid) -> bool,
    {
        let mut toggled = Vec::new();
        {
            let mut grid = SelectionGrid::new(&self.entries)
                .palette(self.palette)
                .options(self.options)
                .offset(self.scroll.offset)
                .on_toggle(|entry| toggled.push(entry));
            activate(&mut grid, &self.rendered);
        }

        for entry in toggled {
            self.apply_toggle(entry);
        }
    }
}
