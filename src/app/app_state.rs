use std::collections::VecDeque;

use crate::config::Config;
use crate::entry;
use crate::facets::CountEntry;
use crate::grid::{GridOptions, Palette, RenderedGrid};
use crate::scroll::ScrollState;

/// How the picker was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Cancelled,
}

pub struct App {
    pub entries: Vec<CountEntry>,
    pub cursor: usize,
    pub scroll: ScrollState,
    /// Row geometry from the last paint, used to resolve clicks
    pub rendered: RenderedGrid,
    pub palette: Palette,
    pub options: GridOptions,
    /// Pending warnings, shown one at a time in arrival order
    warnings: VecDeque<String>,
    pub source: String,
    outcome: Option<Outcome>,
    dirty: bool,
}

impl App {
    pub fn new(entries: Vec<CountEntry>, config: &Config, source: impl Into<String>) -> Self {
        let mut warnings = VecDeque::new();
        let palette = config.theme.palette().unwrap_or_else(|e| {
            warnings.push_back(format!("Invalid theme: {}", e));
            Palette::default()
        });

        let duplicates = entry::duplicate_names(&entries);
        if !duplicates.is_empty() {
            warnings.push_back(format!("Duplicate names: {}", duplicates.join(", ")));
        }

        Self {
            entries,
            cursor: 0,
            scroll: ScrollState::new(),
            rendered: RenderedGrid::default(),
            palette,
            options: config.grid.options(),
            warnings,
            source: source.into(),
            outcome: None,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn confirm(&mut self) {
        self.outcome = Some(Outcome::Confirmed);
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(Outcome::Cancelled);
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Queue a warning behind any already showing
    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.warnings.push_back(message.into());
        self.mark_dirty();
    }

    pub fn warning(&self) -> Option<&str> {
        self.warnings.front().map(String::as_str)
    }

    /// Drop the warning on screen; the next one, if any, takes its place
    pub fn dismiss_warning(&mut self) {
        if self.warnings.pop_front().is_some() {
            self.mark_dirty();
        }
    }

    pub fn selected_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }

    /// Merge a toggled entry reported by the grid
    pub fn apply_toggle(&mut self, updated: CountEntry) {
        #[cfg(debug_assertions)]
        log::debug!("merge '{}' selected={}", updated.name, updated.selected);

        if !entry::merge_entry(&mut self.entries, updated) {
            #[cfg(debug_assertions)]
            log::error!("toggled entry no longer in the list");
        }
        self.mark_dirty();
    }

    /// Select or clear every enabled entry
    pub fn set_all(&mut self, selected: bool) {
        for entry in self.entries.iter_mut().filter(|e| !e.disabled) {
            entry.selected = selected;
        }
        self.mark_dirty();
    }

    pub fn move_cursor_to(&mut self, index: usize) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = index.min(self.entries.len() - 1);
        self.scroll.ensure_visible(self.cursor);
        self.mark_dirty();
    }

    pub fn move_cursor_by(&mut self, delta: isize) {
        self.move_cursor_to(self.cursor.saturating_add_signed(delta));
    }

    /// Full name of the cursor row when it was painted cut short
    pub fn cursor_label(&self) -> Option<&str> {
        self.rendered
            .row(self.cursor)
            .filter(|row| row.elided)
            .and_then(|row| row.label.as_deref())
    }
}
