use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::grid::{self, SelectionGrid};
use crate::theme;
use crate::widgets::scrollbar;

/// Columns left of the grid for the cursor marker
const GUTTER_WIDTH: u16 = 2;

const HINTS: &[(&str, &str)] = &[
    ("Space", "Toggle"),
    ("a/n", "All/None"),
    ("j/k", "Move"),
    ("Enter", "Confirm"),
    ("q", "Cancel"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [list_area, status_area, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_list(frame, list_area);
        self.render_status(frame, status_area);
        render_help_line(frame, help_area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " {} ({}/{}) ",
            self.source,
            self.selected_count(),
            self.entries.len()
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(title, theme::picker::TITLE))
            .border_style(Style::default().fg(theme::picker::BORDER))
            .style(Style::default().bg(theme::picker::BACKGROUND));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [gutter, grid_area] =
            Layout::horizontal([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)]).areas(inner);

        if self.entries.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No entries",
                Style::default().fg(self.palette.font_darkest),
            ));
            frame.render_widget(empty, grid_area);
            self.rendered = Default::default();
            return;
        }

        self.scroll
            .update_bounds(self.entries.len(), grid_area.height as usize);
        self.scroll.ensure_visible(self.cursor);

        let selection = SelectionGrid::new(&self.entries)
            .palette(self.palette)
            .options(self.options)
            .offset(self.scroll.offset);
        self.rendered = grid::render_grid(frame, grid_area, &selection);

        if self.scroll.is_visible(self.cursor) && gutter.width > 0 {
            let y = gutter.y + (self.cursor - self.scroll.offset) as u16;
            frame.buffer_mut().set_stringn(
                gutter.x,
                y,
                theme::picker::CURSOR,
                gutter.width as usize,
                Style::default().fg(theme::picker::CURSOR_FG),
            );
        }

        // Scrollbar on the right border, excluding corners
        let scrollbar_area = Rect {
            x: area.x,
            y: area.y.saturating_add(1),
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        scrollbar::render_list_scrollbar(
            frame.buffer_mut(),
            scrollbar_area,
            &self.scroll,
            self.entries.len(),
            theme::picker::SCROLLBAR,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(warning) = self.warning() {
            Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(theme::picker::WARNING),
            ))
        } else if let Some(label) = self.cursor_label() {
            Line::from(Span::styled(
                format!(" {}", label),
                Style::default().fg(theme::picker::FULL_NAME),
            ))
        } else {
            Line::default()
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(build_styled_spans(HINTS)));
    frame.render_widget(help, area);
}
