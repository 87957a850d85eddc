//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with book count
//! - [`footer`]: Keybinding hints for the active mode
//! - [`table`]: Book list with TITLE, AUTHOR, PAGES, STATUS columns
//! - [`form`]: Add-book dialog box with per-field validation messages
//! - [`status_dialog`]: Change-status dialog box
//! - [`empty`]: Empty state message when the library has no books
//!
//! # Layout Modes
//!
//! The module provides three high-level layout functions, one per input mode:
//!
//! - [`render_browse_mode`]: Header + Table (or empty state) + Footer
//! - [`render_form_mode`]: Header + Form box + Table + Footer
//! - [`render_status_mode`]: Header + Status box + Table + Footer

mod empty;
mod footer;
mod form;
mod header;
mod status_dialog;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormView, StatusDialogView, UiViewModel};

use footer::render_footer;
use form::render_form_box;
use header::render_header;
use status_dialog::render_status_dialog;
use table::{render_table_headers, render_table_rows};

/// Horizontal margin for dialog boxes (spaces on left and right).
pub(crate) const DIALOG_MARGIN: usize = 5;

/// Returns the content width inside a dialog box (terminal width minus
/// margins and the two border columns).
pub(crate) fn box_inner_width(cols: usize) -> usize {
    cols.saturating_sub(DIALOG_MARGIN * 2).saturating_sub(2)
}

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the top border of a titled dialog box.
///
/// # Returns
///
/// The next available row position (row + 1)
pub(crate) fn render_box_top(row: usize, title: &str, theme: &Theme, cols: usize) -> usize {
    let inner_width = box_inner_width(cols);
    let decor = format!("\u{2500} {title} ");
    let fill = inner_width.saturating_sub(decor.chars().count());

    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{250c}{decor}{}\u{2510}", "\u{2500}".repeat(fill));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the bottom border of a dialog box.
///
/// # Returns
///
/// The next available row position (row + 1)
pub(crate) fn render_box_bottom(row: usize, theme: &Theme, cols: usize) -> usize {
    let inner_width = box_inner_width(cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(DIALOG_MARGIN));
    print!("{}", Theme::fg(&theme.colors.dialog_border));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the browse mode layout (no dialog open).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers + Rows]  or  [Empty State]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);
    }

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the add-book form layout.
///
/// Same as browse mode with the form box between the top border and the
/// table. The table keeps rendering below the box so the list stays visible
/// while adding.
pub fn render_form_mode(vm: &UiViewModel, form: &FormView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_form_box(current_row, form, theme, cols);
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the status-edit layout.
///
/// Same as browse mode with the status dialog between the top border and the
/// table; the targeted row stays visible and marked below.
pub fn render_status_mode(
    vm: &UiViewModel,
    dialog: &StatusDialogView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_status_dialog(current_row, dialog, theme, cols);
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the bottom border and footer anchored to the last two rows.
fn render_bottom_chrome(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
