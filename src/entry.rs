//! Selectable entries
//!
//! An `Entry` is one row of a selection grid. Entries are owned by the caller;
//! the grid only reads them and hands back toggled copies.

use ratatui::style::Color;
use serde::Deserialize;

use crate::theme;

/// One selectable item
///
/// `name` is the identity of the entry within its list. Keeping names unique
/// is up to whoever owns the list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry<D> {
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    /// Auxiliary value rendered after the name (a count, a type, ...)
    pub data: D,
    /// Tint used when the entry is selected and enabled
    #[serde(
        default = "theme::default_entry_color",
        deserialize_with = "theme::deserialize_color"
    )]
    pub color: Color,
    #[serde(default)]
    pub disabled: bool,
}

impl<D> Entry<D> {
    pub fn new(name: impl Into<String>, data: D) -> Self {
        Self {
            name: name.into(),
            selected: false,
            data,
            color: theme::grid::DEFAULT_ENTRY_COLOR,
            disabled: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Copy of this entry with the selection flipped
    pub fn toggled(&self) -> Self
    where
        D: Clone,
    {
        Self {
            selected: !self.selected,
            ..self.clone()
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }
}

/// Replace the entry with the same name as `updated`
///
/// Returns false when no entry carries that name.
pub fn merge_entry<D>(entries: &mut [Entry<D>], updated: Entry<D>) -> bool {
    match entries.iter_mut().find(|e| e.name == updated.name) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Names that appear more than once, in first-seen order
pub fn duplicate_names<D>(entries: &[Entry<D>]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for entry in entries {
        if !seen.insert(entry.name.as_str()) && !duplicates.contains(&entry.name.as_str()) {
            duplicates.push(entry.name.as_str());
        }
    }
    duplicates
}
