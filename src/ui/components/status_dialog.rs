//! Status-edit dialog component renderer.
//!
//! This module renders the change-status dialog: a bordered box naming the
//! targeted book and showing the candidate status between cycling arrows.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusDialogView;

use super::{box_inner_width, render_box_bottom, render_box_top, DIALOG_MARGIN};

/// Renders the status-edit dialog box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─ Change Status ─────────────┐ [margin]
/// [margin] │ Book:   Dune                │
/// [margin] │ Status: ◂ Reading ▸         │
/// [margin] └─────────────────────────────┘
/// ```
///
/// Always four lines, matching the space the state layer reserves for it.
///
/// # Returns
///
/// The next available row position (row + 4).
pub fn render_status_dialog(
    row: usize,
    dialog: &StatusDialogView,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = render_box_top(row, "Change Status", theme, cols);

    current_row = render_line(
        current_row,
        "Book:",
        &dialog.book_title,
        &Theme::fg(&theme.colors.text_normal),
        theme,
        cols,
    );
    current_row = render_line(
        current_row,
        "Status:",
        &format!("\u{25c2} {} \u{25b8}", dialog.choice_label),
        &Theme::fg(theme.status_color(dialog.choice)),
        theme,
        cols,
    );

    render_box_bottom(current_row, theme, cols)
}

/// Renders one labeled content line inside the dialog box.
fn render_line(
    row: usize,
    label: &str,
    value: &str,
    value_style: &str,
    theme: &Theme,
    cols: usize,
) -> usize {
    let inner_width = box_inner_width(cols);
    let label_padded = format!("{label:<8}");

    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2502}");

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {label_padded}");
    print!("{value_style}");
    print!("{value}");

    let used = 1 + 8 + display_width(value);
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));

    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());
    row + 1
}
