//! Word wrapping for the transcript.
//!
//! The transcript is wrapped ahead of rendering so the scroll math works on
//! the exact number of visual rows the terminal will show.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap one logical line into rows no wider than `width` columns.
///
/// Breaks at spaces when possible and splits words that are wider than a
/// whole row. Always returns at least one row.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0usize;
    let mut row_has_words = false;

    for word in text.split(' ') {
        let word_width = word.width();

        if row_has_words {
            if row_width + 1 + word_width <= width {
                row.push(' ');
                row.push_str(word);
                row_width += 1 + word_width;
                continue;
            }
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        row_has_words = true;
    }

    rows.push(row);
    rows
}

/// Spaces written in place of a tab.
pub const TAB_WIDTH: usize = 4;

/// Make text safe to put into terminal cells.
///
/// CRLF and lone CR become `\n`, tabs become spaces, and any other control
/// character is dropped.
pub fn sanitize_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\n' => out.push('\n'),
            '\t' => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            ch if ch.is_control() => {}
            ch => out.push(ch),
        }
    }
    out
}

/// Wrap multi-line text, keeping explicit line breaks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    sanitize_for_display(text)
        .split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}
