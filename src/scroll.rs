//! Vertical viewport over a list of rows
//!
//! Owned by the host, not the grid: the grid only receives the offset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_offset = content_rows.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Move the viewport the least amount needed to show `row`
    pub fn ensure_visible(&mut self, row: usize) {
        if self.viewport_height == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport_height {
            self.offset = row + 1 - self.viewport_height;
        }
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn is_visible(&self, row: usize) -> bool {
        row >= self.offset && row < self.offset + self.viewport_height
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
