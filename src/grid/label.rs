//! Width-aware name elision

use unicode_width::UnicodeWidthStr;

use crate::theme::grid::ELLIPSIS;

/// Fit `text` into `max_width` display columns
///
/// Text that overflows is cut and ends with an ellipsis. Returns the text to
/// paint and whether it was cut.
pub fn elide(text: &str, max_width: usize) -> (String, bool) {
    if text.width() <= max_width {
        return (text.to_string(), false);
    }

    if max_width < ELLIPSIS.width() {
        return (String::new(), true);
    }
    let budget = max_width - ELLIPSIS.width();

    // Prefixes are measured as strings: a variation selector can widen the
    // character before it, so per-char widths undercount emoji.
    let mut cut = 0;
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        if text[..end].width() > budget {
            break;
        }
        cut = end;
    }

    let mut out = text[..cut].to_string();
    out.push_str(ELLIPSIS);

    (out, true)
}
