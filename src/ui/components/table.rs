//! Table component renderer.
//!
//! This module renders the book list as a four-column table with TITLE,
//! AUTHOR, PAGES and STATUS columns. It supports selection highlighting, a
//! marker on the row targeted by an open status-edit dialog, and per-status
//! cell colors.

use crate::ui::helpers::{display_width, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookRow;

/// Width of the TITLE column in character cells.
const TITLE_COLUMN_WIDTH: usize = 30;

/// Width of the AUTHOR column in character cells.
const AUTHOR_COLUMN_WIDTH: usize = 20;

/// Width of the right-aligned PAGES column in character cells.
const PAGES_COLUMN_WIDTH: usize = 6;

/// Spacing between the PAGES and STATUS columns.
const COLUMN_GAP: usize = 2;

/// Renders the table column headers at the specified row.
///
/// Displays TITLE, AUTHOR, PAGES and STATUS headers with bold styling and
/// theme colors.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_padded("TITLE", TITLE_COLUMN_WIDTH);
    print_padded("AUTHOR", AUTHOR_COLUMN_WIDTH);
    print!("{:>width$}", "PAGES", width = PAGES_COLUMN_WIDTH);
    print!("{}", " ".repeat(COLUMN_GAP));
    print!("STATUS");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, items: &[BookRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single book row at the specified row position.
///
/// # Layout
///
/// ```text
/// [▸ ]TITLE (30 incl. marker)  AUTHOR (20)  PAGES (6, right)  STATUS
/// ```
///
/// # Styling Precedence
///
/// 1. Selection colors (full row, if `is_selected`)
/// 2. Per-status color on the STATUS cell (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_table_row(row: usize, item: &BookRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut title_width = TITLE_COLUMN_WIDTH;
    if item.is_editing {
        print!("{}", Theme::fg(&theme.colors.dialog_border));
        print!("\u{25b8} ");
        title_width -= 2;
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    }

    print_padded(&item.title, title_width);
    print_padded(&item.author, AUTHOR_COLUMN_WIDTH);
    print!("{:>width$}", item.pages, width = PAGES_COLUMN_WIDTH);
    print!("{}", " ".repeat(COLUMN_GAP));

    if !item.is_selected {
        print!("{}", Theme::fg(theme.status_color(item.status)));
    }
    print!("{}", item.status_label);

    let line_len = TITLE_COLUMN_WIDTH
        + AUTHOR_COLUMN_WIDTH
        + PAGES_COLUMN_WIDTH
        + COLUMN_GAP
        + display_width(&item.status_label);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
