//! Add-book form component renderer.
//!
//! This module renders the add-book dialog as a bordered box containing one
//! line per field and one line per validation message. The focused field is
//! marked and, for text fields, gets a trailing input cursor; the status
//! choice renders with cycling arrows when focused.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldView, FormView};

use super::{box_inner_width, render_box_bottom, render_box_top, DIALOG_MARGIN};

/// Width reserved for the field label column inside the box (label + colon,
/// left-aligned).
const LABEL_WIDTH: usize = 8;

/// Renders the add-book form box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─ Add Book ──────────────────┐ [margin]
/// [margin] │ ▸ Title:  Dune_             │
/// [margin] │   Author: Herbert           │
/// [margin] │   Pages:  412               │
/// [margin] │   Status: ◂ To Be Read ▸    │
/// [margin] │ ! Pages must be a number    │  (one line per violation)
/// [margin] └─────────────────────────────┘
/// ```
///
/// The box height is `6 + violation count`; the state layer reserves the same
/// number of lines when computing table space.
///
/// # Returns
///
/// The next available row position.
pub fn render_form_box(row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_box_top(row, "Add Book", theme, cols);

    for field in &form.fields {
        current_row = render_field_line(current_row, field, theme, cols);
    }

    for message in form.error_lines() {
        current_row = render_error_line(current_row, message, theme, cols);
    }

    render_box_bottom(current_row, theme, cols)
}

/// Renders one field line inside the box.
fn render_field_line(row: usize, field: &FieldView, theme: &Theme, cols: usize) -> usize {
    let inner_width = box_inner_width(cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2502}");

    let marker = if field.is_focused { "\u{25b8} " } else { "  " };
    let label = format!("{:<width$}", format!("{}:", field.label), width = LABEL_WIDTH);
    let value = display_value(field);

    if field.is_focused {
        print!("{}", Theme::fg(&theme.colors.dialog_border));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!(" {marker}");
    print!("{label}");

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{value}");

    let used = 1 + 2 + LABEL_WIDTH + display_width(&value);
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));

    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one validation message line inside the box.
fn render_error_line(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let inner_width = box_inner_width(cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2502}");

    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!(" ! {message}");

    let used = 3 + display_width(message);
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));

    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());
    row + 1
}

/// Formats a field value for display.
///
/// Focused text fields get a trailing input cursor; the focused status choice
/// gets cycling arrows.
fn display_value(field: &FieldView) -> String {
    match (field.is_choice, field.is_focused) {
        (true, true) => format!("\u{25c2} {} \u{25b8}", field.value),
        (false, true) => format!("{}_", field.value),
        _ => field.value.clone(),
    }
}
