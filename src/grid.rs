//! Selection grid widget
//!
//! Renders an ordered list of entries as checkbox rows and reports toggles
//! through a caller-supplied callback. The grid keeps no state between
//! frames: the caller owns the entries, re-supplies them on every render and
//! merges the toggled copies it receives.

mod grid_events;
mod grid_render;
pub mod label;
mod palette;
mod rendered;
mod selection_grid;

pub use grid_events::{handle_key, handle_mouse};
pub use grid_render::render_grid;
pub use palette::{GridOptions, Palette};
pub use rendered::{RenderedGrid, RenderedRow};
pub use selection_grid::{SelectionGrid, ToggleHandler};

/// Columns taken by the checkbox glyph, reserved on every row
pub const CONTROL_WIDTH: u16 = 4;


#[cfg(test)]
#[path = "grid/grid_events_tests.rs"]
mod grid_events_tests;
