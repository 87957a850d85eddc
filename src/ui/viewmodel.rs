//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: truncated cells, selection marks,
//! and rendered validation messages.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data; in
//! particular the row list is re-derived from the collection on every
//! computation, so it can never disagree with it.

use crate::domain::ReadingStatus;

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the widget: table rows,
/// selection state, header/footer chrome, and the optional dialog views for
/// the current input mode.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Visible table rows, one per book in the display window.
    pub rows: Vec<BookRow>,

    /// Index of the cursor row within `rows`.
    pub selected_index: usize,

    /// Header information (title, book count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints for the active mode).
    pub footer: FooterInfo,

    /// Optional empty state message (library empty, no dialog open).
    ///
    /// When set, the table (including its column headers) is not rendered.
    pub empty_state: Option<EmptyState>,

    /// Add-book form view, set while the form dialog is open.
    pub form: Option<FormView>,

    /// Status-edit dialog view, set while that dialog is open.
    pub status_dialog: Option<StatusDialogView>,
}

/// Display information for a single book row.
///
/// Cells are pre-truncated to their column widths; the status keeps its enum
/// value alongside the label so the renderer can pick a per-status color.
#[derive(Debug, Clone)]
pub struct BookRow {
    /// Title cell text.
    pub title: String,

    /// Author cell text.
    pub author: String,

    /// Page count cell text.
    pub pages: String,

    /// Status cell text.
    pub status_label: String,

    /// Status value backing the cell, for color selection.
    pub status: ReadingStatus,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Whether an open status-edit dialog targets this row.
    pub is_editing: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active input mode.
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown instead of the table when the library holds no books.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No books in the library").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Add-book form display information.
#[derive(Debug, Clone)]
pub struct FormView {
    /// Field views in render order: title, author, pages, status.
    pub fields: Vec<FieldView>,
}

impl FormView {
    /// Rendered messages of all violating fields, in field order.
    #[must_use]
    pub fn error_lines(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|f| f.error.as_deref())
            .collect()
    }
}

/// One add-book form field, ready to render.
#[derive(Debug, Clone)]
pub struct FieldView {
    /// Field label ("Title", "Author", ...).
    pub label: String,

    /// Current field value as typed, or the status choice label.
    pub value: String,

    /// Whether this field has input focus.
    pub is_focused: bool,

    /// Whether this is a cycled choice (the status field) rather than a
    /// typed text field. Controls cursor vs. arrow rendering when focused.
    pub is_choice: bool,

    /// Rendered violation message from the last rejected submit, if any.
    pub error: Option<String>,
}

/// Status-edit dialog display information.
#[derive(Debug, Clone)]
pub struct StatusDialogView {
    /// Title of the book being edited (truncated).
    pub book_title: String,

    /// Label of the candidate status.
    pub choice_label: String,

    /// Candidate status value, for color selection.
    pub choice: ReadingStatus,
}
