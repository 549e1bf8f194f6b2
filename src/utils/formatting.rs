//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthChar;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Replace line breaks with spaces so a value fits on one table row.
pub fn flatten(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Cut `text` to at most `max` display columns and append `...` when
/// anything was dropped. Line breaks are flattened to spaces first.
pub fn truncate(text: &str, max: usize) -> String {
    let flat = flatten(text);

    let mut width = 0;
    for (idx, c) in flat.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max {
            return format!("{}...", &flat[..idx]);
        }
    }
    flat
}
