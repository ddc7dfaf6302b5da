//! Tests for grid activation

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use ratatui::style::Color;

use super::*;
use crate::entry::Entry;
use crate::test_utils::test_helpers::{
    cat, key, left_click, mixed_entries, mouse, render_to_buffer,
};

#[test]
fn test_activate_emits_toggled_copy() {
    let entries = vec![cat()];
    let mut toggled = Vec::new();

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|e| toggled.push(e));
        let (_, rendered) = render_to_buffer(&grid, 20, 1);
        assert!(grid.activate_at(&rendered, Position::new(1, 0)));
    }

    assert_eq!(
        toggled,
        vec![Entry {
            name: "cat".to_string(),
            selected: true,
            data: 12,
            color: Color::Rgb(255, 0, 0),
            disabled: false,
        }]
    );
    // Caller state untouched until it merges the copy
    assert!(!entries[0].selected);
}

#[test]
fn test_activate_selected_entry_deselects() {
    let entries = vec![cat().selected(true)];
    let mut toggled = Vec::new();

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|e| toggled.push(e));
        let (_, rendered) = render_to_buffer(&grid, 20, 1);
        assert!(grid.activate_row(&rendered, 0));
    }

    assert_eq!(toggled, vec![cat()]);
}

#[test]
fn test_clicking_the_label_toggles() {
    let entries = vec![cat()];
    let mut count = 0;

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|_| count += 1);
        let (_, rendered) = render_to_buffer(&grid, 20, 1);
        assert!(grid.activate_at(&rendered, Position::new(5, 0)));
        assert!(grid.activate_at(&rendered, Position::new(19, 0)));
    }

    assert_eq!(count, 2);
}

#[test]
fn test_disabled_entry_never_toggles() {
    let entries = vec![cat().disabled(true)];
    let mut count = 0;

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|_| count += 1);
        let (_, rendered) = render_to_buffer(&grid, 20, 1);

        for x in 0..20 {
            assert!(!grid.activate_at(&rendered, Position::new(x, 0)));
        }
        assert!(!grid.activate_row(&rendered, 0));
        assert!(!handle_mouse(&mut grid, &rendered, left_click(1, 0)));
        assert!(!handle_key(&mut grid, &rendered, 0, key(KeyCode::Char(' '))));
    }

    assert_eq!(count, 0);
}

#[test]
fn test_stale_geometry_cannot_toggle_newly_disabled_entry() {
    let enabled = vec![cat()];
    let disabled = vec![cat().disabled(true)];
    let mut count = 0;

    let (_, stale) = render_to_buffer(&SelectionGrid::new(&enabled), 20, 1);
    {
        let mut grid = SelectionGrid::new(&disabled).on_toggle(|_| count += 1);
        assert!(!grid.activate_at(&stale, Position::new(1, 0)));
    }

    assert_eq!(count, 0);
}

#[test]
fn test_stale_geometry_past_shrunk_list_is_ignored() {
    let before = mixed_entries();
    let after = vec![cat()];
    let mut count = 0;

    let (_, stale) = render_to_buffer(&SelectionGrid::new(&before), 20, 3);
    {
        let mut grid = SelectionGrid::new(&after).on_toggle(|_| count += 1);
        assert!(!grid.activate_at(&stale, Position::new(1, 1)));
    }

    assert_eq!(count, 0);
}

#[test]
fn test_stale_geometry_after_reorder_is_ignored() {
    let before = vec![cat(), Entry::new("dog", 7)];
    let after = vec![Entry::new("dog", 7), cat()];
    let toggled = RefCell::new(Vec::new());

    let (_, stale) = render_to_buffer(&SelectionGrid::new(&before), 20, 2);
    {
        let mut grid =
            SelectionGrid::new(&after).on_toggle(|entry| toggled.borrow_mut().push(entry));
        // row 0 was painted as "cat", which now sits at index 1
        assert!(!grid.activate_at(&stale, Position::new(1, 0)));
        assert!(!grid.activate_row(&stale, 1));
    }
    assert!(toggled.borrow().is_empty());

    let (_, fresh) = render_to_buffer(&SelectionGrid::new(&after), 20, 2);
    {
        let mut grid =
            SelectionGrid::new(&after).on_toggle(|entry| toggled.borrow_mut().push(entry));
        assert!(grid.activate_at(&fresh, Position::new(1, 0)));
    }
    assert_eq!(toggled.into_inner(), vec![Entry::new("dog", 7).selected(true)]);
}

#[test]
fn test_missing_handler_is_a_no_op() {
    let entries = vec![cat()];
    let mut grid = SelectionGrid::new(&entries);
    let (_, rendered) = render_to_buffer(&grid, 20, 1);

    assert!(grid.is_read_only());
    assert!(!grid.activate_at(&rendered, Position::new(1, 0)));
    assert!(!grid.activate_row(&rendered, 0));
}

#[test]
fn test_click_outside_rows() {
    let entries = vec![cat()];
    let mut count = 0;

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|_| count += 1);
        let (_, rendered) = render_to_buffer(&grid, 20, 3);
        assert!(!grid.activate_at(&rendered, Position::new(1, 1)));
        assert!(!grid.activate_at(&rendered, Position::new(25, 0)));
    }

    assert_eq!(count, 0);
}

#[test]
fn test_rows_outside_viewport_have_no_control() {
    let entries: Vec<Entry<u64>> = (0..4).map(|i| Entry::new(format!("e{}", i), i)).collect();
    let mut count = 0;

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|_| count += 1);
        let (_, rendered) = render_to_buffer(&grid, 10, 2);
        assert!(!grid.activate_row(&rendered, 3));
        assert!(grid.activate_row(&rendered, 1));
    }

    assert_eq!(count, 1);
}

#[test]
fn test_each_activation_is_one_callback() {
    let entries = mixed_entries();
    let seen = RefCell::new(Vec::new());

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|e| seen.borrow_mut().push(e.name));
        let (_, rendered) = render_to_buffer(&grid, 20, 3);
        grid.activate_at(&rendered, Position::new(0, 0));
        grid.activate_at(&rendered, Position::new(0, 1));
        grid.activate_at(&rendered, Position::new(0, 0));
        grid.activate_at(&rendered, Position::new(0, 2));
    }

    assert_eq!(seen.into_inner(), vec!["cat", "dog", "cat"]);
}

#[test]
fn test_handle_mouse_only_reacts_to_left_press() {
    let entries = vec![cat()];
    let mut count = 0;

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|_| count += 1);
        let (_, rendered) = render_to_buffer(&grid, 20, 1);

        assert!(!handle_mouse(&mut grid, &rendered, mouse(MouseEventKind::Moved, 1, 0)));
        assert!(!handle_mouse(
            &mut grid,
            &rendered,
            mouse(MouseEventKind::Up(MouseButton::Left), 1, 0)
        ));
        assert!(!handle_mouse(
            &mut grid,
            &rendered,
            mouse(MouseEventKind::Down(MouseButton::Right), 1, 0)
        ));
        assert!(!handle_mouse(&mut grid, &rendered, mouse(MouseEventKind::ScrollDown, 1, 0)));
        assert!(handle_mouse(&mut grid, &rendered, left_click(1, 0)));
    }

    assert_eq!(count, 1);
}

#[test]
fn test_handle_key_space_toggles_cursor_row() {
    let entries = mixed_entries();
    let mut toggled = Vec::new();

    {
        let mut grid = SelectionGrid::new(&entries).on_toggle(|e| toggled.push(e));
        let (_, rendered) = render_to_buffer(&grid, 20, 3);

        assert!(handle_key(&mut grid, &rendered, 1, key(KeyCode::Char(' '))));
        assert!(!handle_key(&mut grid, &rendered, 1, key(KeyCode::Char('x'))));
        assert!(!handle_key(&mut grid, &rendered, 9, key(KeyCode::Char(' '))));

        let release = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::empty(),
            KeyEventKind::Release,
        );
        assert!(!handle_key(&mut grid, &rendered, 1, release));
    }

    assert_eq!(toggled.len(), 1);
    assert_eq!(toggled[0].name, "dog");
    assert!(!toggled[0].selected);
}

#[test]
fn test_round_trip_through_caller_merge() {
    let mut entries = vec![cat()];

    for expected in [true, false, true] {
        let mut toggled = Vec::new();
        let (buf, rendered) = {
            let grid = SelectionGrid::new(&entries);
            render_to_buffer(&grid, 20, 1)
        };
        assert_eq!(buf[(1, 0)].symbol(), if expected { " " } else { "x" });

        {
            let mut grid = SelectionGrid::new(&entries).on_toggle(|e| toggled.push(e));
            assert!(grid.activate_at(&rendered, Position::new(0, 0)));
        }
        for entry in toggled {
            crate::entry::merge_entry(&mut entries, entry);
        }

        assert_eq!(entries[0].selected, expected);
        let grid = SelectionGrid::new(&entries);
        let (buf, _) = render_to_buffer(&grid, 20, 1);
        assert_eq!(buf[(1, 0)].symbol(), if expected { "x" } else { " " });
    }
}
