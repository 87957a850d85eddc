//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning and width math for padding. All output goes
//! to stdout as ANSI escape sequences, matching the Zellij plugin rendering
//! model.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns the number of character cells a cell text occupies.
///
/// Counted in characters, not bytes, so padding math stays correct for
/// truncated cells ending in an ellipsis and for non-ASCII titles.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` followed by spaces up to `width` columns.
///
/// Text wider than `width` is printed as-is; callers pre-truncate cells in
/// the view model.
pub fn print_padded(text: &str, width: usize) {
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(display_width(text))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_characters_not_bytes() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("b\u{fc}cher\u{2026}"), 7);
    }
}
