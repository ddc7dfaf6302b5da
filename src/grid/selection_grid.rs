use crate::entry::Entry;

use super::palette::{GridOptions, Palette};

/// Receives the toggled copy of an entry
pub type ToggleHandler<'a, D> = Box<dyn FnMut(Entry<D>) + 'a>;

/// A checkbox row per entry, in entry order
///
/// Built fresh for every frame over the caller's entries. Without a toggle
/// handler the grid is display-only: activations are ignored.
pub struct SelectionGrid<'a, D> {
    pub(super) entries: &'a [Entry<D>],
    pub(super) on_toggle: Option<ToggleHandler<'a, D>>,
    pub(super) palette: Palette,
    pub(super) options: GridOptions,
    pub(super) offset: usize,
}

impl<'a, D> SelectionGrid<'a, D> {
    pub fn new(entries: &'a [Entry<D>]) -> Self {
        Self {
            entries,
            on_toggle: None,
            palette: Palette::default(),
            options: GridOptions::default(),
            offset: 0,
        }
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// First entry painted at the top of the area
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn on_toggle<F>(mut self, handler: F) -> Self
    where
        F: FnMut(Entry<D>) + 'a,
    {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.on_toggle.is_none()
    }
}
