use ratatui::layout::{Position, Rect};

/// Geometry of one painted frame of a selection grid
///
/// Holds one row per entry, in entry order, whether or not the row fit in
/// the viewport. Hosts keep the value from the last paint to resolve clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedGrid {
    pub rows: Vec<RenderedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Position of the entry in the input sequence
    pub index: usize,
    /// Name of the entry painted here, checked again on activation
    pub name: String,
    /// Painted row, `None` when outside the viewport
    pub area: Option<Rect>,
    /// Clickable control, never present for disabled entries
    pub control: Option<Rect>,
    /// The name was cut to fit
    pub elided: bool,
    /// Full name, when the grid was asked to keep it
    pub label: Option<String>,
}

impl RenderedRow {
    pub fn is_painted(&self) -> bool {
        self.area.is_some()
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }
}

impl RenderedGrid {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&RenderedRow> {
        self.rows.get(index)
    }

    pub fn painted_rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows.iter().filter(|row| row.is_painted())
    }

    /// Index of the entry whose control covers `position`
    pub fn control_at(&self, position: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.control.is_some_and(|rect| rect.contains(position)))
            .map(|row| row.index)
    }

    /// Index of the entry painted at `position`, disabled rows included
    pub fn row_at(&self, position: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.area.is_some_and(|rect| rect.contains(position)))
            .map(|row| row.index)
    }
}
