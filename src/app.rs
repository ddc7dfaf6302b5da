//! Terminal picker hosting a selection grid
//!
//! The picker owns the authoritative entry list. Every frame it builds a
//! fresh grid over that list, and every toggle the grid reports is merged
//! back by name before the next frame.

mod app_events;
mod app_render;
mod app_state;



pub use app_state::{App, Outcome};
