//! checkgrid library - Stateless checkbox selection grid for ratatui
//!
//! The `grid` module is the widget; everything else supports the terminal
//! picker that hosts it.

pub mod app;
pub mod config;
pub mod entry;
pub mod error;
pub mod facets;
pub mod grid;
pub mod scroll;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use entry::Entry;
pub use grid::{GridOptions, Palette, RenderedGrid, SelectionGrid};
