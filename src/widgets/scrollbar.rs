//! Scrollbar for lists that outgrow their viewport

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use crate::scroll::ScrollState;

/// Draw a thumb-and-track scrollbar down the right edge of `area`
///
/// Nothing is drawn while all `total_rows` fit in the viewport.
pub fn render_list_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    scroll: &ScrollState,
    total_rows: usize,
    color: Color,
) {
    let viewport = scroll.viewport_height;
    if viewport == 0 || total_rows <= viewport {
        return;
    }

    // One position per reachable offset so the thumb lands on the last
    // row exactly when the list is scrolled to its end.
    let last_offset = total_rows - viewport;
    let mut state = ScrollbarState::new(last_offset + 1)
        .position(scroll.offset.min(last_offset))
        .viewport_content_length(viewport);

    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color))
        .render(area, buf, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
