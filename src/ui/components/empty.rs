//! Empty state component renderer.
//!
//! This module renders the message shown instead of the table when the
//! library holds no books. This is the terminal analog of hiding an empty
//! table element: neither rows nor column headers are drawn.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Row where the primary empty-state message is drawn.
const MESSAGE_ROW: usize = 6;

/// Renders the empty state message.
///
/// Displays a centered two-line message: the primary message in the
/// `empty_state_fg` theme color and a dimmed subtitle below it.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered_line(
        MESSAGE_ROW,
        &empty.message,
        &Theme::fg(&theme.colors.empty_state_fg),
        cols,
    );
    render_centered_line(
        MESSAGE_ROW + 1,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
}

/// Renders one horizontally centered, width-padded line with the given style.
fn render_centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let len = display_width(text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
