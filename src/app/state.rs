//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with cursor management and UI view model generation. It serves as the
//! single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` owns the book collection and everything derived from it: the
//! table cursor, the current input mode, and the add-book form buffers. View
//! models are computed on-demand from state snapshots; nothing about the
//! rendered table is stored back into the state, so the row set can never
//! drift out of sync with the collection.
//!
//! # State Components
//!
//! - **Library**: the ordered in-memory book collection
//! - **Cursor**: current selection within the table, clamped after mutations
//! - **Input Mode**: controls keybinding interpretation and dialog rendering
//! - **Form**: raw add-book field buffers, focus, and validation errors

use crate::domain::{Book, BookDraft, Field, FieldError, Library};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BookRow, EmptyState, FieldView, FooterInfo, FormView, HeaderInfo, StatusDialogView,
    UiViewModel,
};

use super::modes::{FormField, InputMode, StatusEdit};

/// Maximum characters shown in the TITLE cell before truncation.
const TITLE_CELL_MAX: usize = 28;

/// Maximum characters shown in the AUTHOR cell before truncation.
const AUTHOR_CELL_MAX: usize = 18;

/// Lines of UI chrome outside the table in browse mode: blank top line,
/// header, top border, column headers, bottom border, footer.
const CHROME_ROWS: usize = 6;

/// Lines used by the status-edit dialog box (two borders, book line,
/// choice line).
const STATUS_DIALOG_ROWS: usize = 4;

/// The add-book form: raw field buffers, focus, and current violations.
///
/// Buffers survive a cancelled dialog (reopening shows what was typed, as the
/// original widget did); a successful submit clears everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    /// Raw field values, exactly as typed.
    pub draft: BookDraft,

    /// Which field receives character input and focus highlighting.
    pub focus: FormField,

    /// Violations from the last rejected submit, empty otherwise.
    pub errors: Vec<FieldError>,
}

impl BookForm {
    /// Resets buffers, focus, and errors to their defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the text buffer of the focused field, or `None` when the
    /// status choice is focused (it is cycled, not typed).
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Author => Some(&mut self.draft.author),
            FormField::Pages => Some(&mut self.draft.pages),
            FormField::Status => None,
        }
    }

    /// Returns the rendered message for the given field's violation, if any.
    #[must_use]
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(ToString::to_string)
    }
}

/// Central application state container.
///
/// Holds all transient UI state: the book collection, the table cursor, mode
/// information, and the add-book form. Mutated by the event handler in
/// response to user input; view models are computed on-demand from snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The owned in-memory book collection, insertion order = display order.
    pub library: Library,

    /// Zero-based cursor position within the table.
    ///
    /// Clamped to valid bounds by [`clamp_selection`](Self::clamp_selection)
    /// after removals. Wraps around during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and which dialog box renders. The
    /// status-edit selection lives inside the mode itself.
    pub input_mode: InputMode,

    /// Add-book form buffers, focus, and validation errors.
    pub form: BookForm,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with an empty library and the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            library: Library::new(),
            selected_index: 0,
            input_mode: InputMode::Browse,
            form: BookForm::default(),
            theme,
        }
    }

    /// Moves the cursor down by one row, wrapping to the top at the end.
    ///
    /// No-op when the library is empty.
    pub fn move_selection_down(&mut self) {
        if self.library.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.library.len();
    }

    /// Moves the cursor up by one row, wrapping to the bottom at the start.
    ///
    /// No-op when the library is empty.
    pub fn move_selection_up(&mut self) {
        if self.library.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.library.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the book under the cursor, if any.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.library.books().get(self.selected_index)
    }

    /// Clamps the cursor to the current collection bounds.
    ///
    /// Called after removals so the cursor lands on the last row when the
    /// removed book was at the end.
    pub fn clamp_selection(&mut self) {
        if self.library.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.library.len() - 1);
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Projects the collection onto table rows in insertion order (one row per
    /// book, so row count always equals collection length within the visible
    /// window), marks the cursor row and the row targeted by an open
    /// status-edit dialog, and attaches the mode-specific dialog view. Handles
    /// windowing by centering the visible slice on the cursor when the list
    /// exceeds the viewport.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UiViewModel {
        let available_rows = self.calculate_available_rows(rows);

        let books = self.library.books();
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(books.len());

        let actual_count = visible_end.saturating_sub(visible_start);
        if actual_count < available_rows && books.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let editing_id = match self.input_mode {
            InputMode::EditStatus(edit) => Some(edit.book_id),
            _ => None,
        };

        let display_rows: Vec<BookRow> = books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_book_row(
                    book,
                    absolute_idx == self.selected_index,
                    editing_id == Some(book.id),
                )
            })
            .collect();

        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        UiViewModel {
            rows: display_rows,
            selected_index: selected_display_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            form: self.compute_form_view(),
            status_dialog: self.compute_status_dialog(),
        }
    }

    /// Computes the display row for a single book.
    fn compute_book_row(book: &Book, is_selected: bool, is_editing: bool) -> BookRow {
        BookRow {
            title: truncate_cell(&book.title, TITLE_CELL_MAX),
            author: truncate_cell(&book.author, AUTHOR_CELL_MAX),
            pages: book.pages.to_string(),
            status_label: book.status.label().to_string(),
            status: book.status,
            is_selected,
            is_editing,
        }
    }

    /// Computes the header title with the current book count.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Book Library ({}) ", self.library.len()),
        }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: navigate  a: add book  Enter: change status  d: remove  q: quit"
                    .to_string()
            }
            InputMode::AddBook => {
                "Tab/Down: next field  Shift+Tab/Up: previous  \u{2190}/\u{2192}: status  Enter: add  Esc: cancel"
                    .to_string()
            }
            InputMode::EditStatus(_) => {
                "j/k or \u{2191}/\u{2193}: choose status  Enter: confirm  Esc: cancel".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes the empty-state message when the table has nothing to show.
    ///
    /// Only set in browse mode; while the add-book form is open the (empty)
    /// table section simply renders no rows.
    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.library.is_empty() && matches!(self.input_mode, InputMode::Browse) {
            Some(EmptyState {
                message: "No books in the library".to_string(),
                subtitle: "Press 'a' to add your first book".to_string(),
            })
        } else {
            None
        }
    }

    /// Computes the add-book form view when the form dialog is open.
    fn compute_form_view(&self) -> Option<FormView> {
        if self.input_mode != InputMode::AddBook {
            return None;
        }

        let form = &self.form;
        let fields = vec![
            FieldView {
                label: Field::Title.label().to_string(),
                value: form.draft.title.clone(),
                is_focused: form.focus == FormField::Title,
                is_choice: false,
                error: form.error_message(Field::Title),
            },
            FieldView {
                label: Field::Author.label().to_string(),
                value: form.draft.author.clone(),
                is_focused: form.focus == FormField::Author,
                is_choice: false,
                error: form.error_message(Field::Author),
            },
            FieldView {
                label: Field::Pages.label().to_string(),
                value: form.draft.pages.clone(),
                is_focused: form.focus == FormField::Pages,
                is_choice: false,
                error: form.error_message(Field::Pages),
            },
            FieldView {
                label: "Status".to_string(),
                value: form.draft.status.label().to_string(),
                is_focused: form.focus == FormField::Status,
                is_choice: true,
                error: None,
            },
        ];

        Some(FormView { fields })
    }

    /// Computes the status-edit dialog view when the dialog is open.
    ///
    /// Returns `None` when the targeted book no longer resolves; the
    /// single-threaded event flow makes that unreachable, but the lookup is
    /// total rather than trusting it.
    fn compute_status_dialog(&self) -> Option<StatusDialogView> {
        let InputMode::EditStatus(StatusEdit { book_id, choice }) = self.input_mode else {
            return None;
        };

        let book = self.library.get(book_id)?;
        Some(StatusDialogView {
            book_title: truncate_cell(&book.title, TITLE_CELL_MAX),
            choice_label: choice.label().to_string(),
            choice,
        })
    }

    /// Calculates rows available for the table after subtracting UI chrome
    /// and any open dialog box.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let dialog_rows = match self.input_mode {
            InputMode::Browse => 0,
            // two borders + four field lines + one line per violation
            InputMode::AddBook => 6 + self.form.errors.len(),
            InputMode::EditStatus(_) => STATUS_DIALOG_ROWS,
        };

        total_rows.saturating_sub(CHROME_ROWS + dialog_rows)
    }
}

/// Truncates cell text to a maximum number of characters, appending an
/// ellipsis when shortened. Operates on characters, not bytes.
fn truncate_cell(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookDraft, NewBook, ReadingStatus};

    fn state_with_books(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        for i in 0..count {
            state.library.add(NewBook {
                title: format!("Book {i}"),
                author: "Author".to_string(),
                pages: 100,
                status: ReadingStatus::ToBeRead,
            });
        }
        state
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = state_with_books(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn cursor_movement_is_a_no_op_on_empty_library() {
        let mut state = state_with_books(0);
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_row_count_equals_collection_length() {
        let state = state_with_books(4);
        let vm = state.compute_viewmodel(24);
        assert_eq!(vm.rows.len(), state.library.len());
    }

    #[test]
    fn viewmodel_windows_long_lists_around_the_cursor() {
        let mut state = state_with_books(50);
        state.selected_index = 25;

        let vm = state.compute_viewmodel(24);
        assert!(vm.rows.len() < state.library.len());
        assert!(vm.rows[vm.selected_index].is_selected);
        assert_eq!(vm.rows[vm.selected_index].title, "Book 25");
    }

    #[test]
    fn empty_library_shows_empty_state_instead_of_rows() {
        let state = state_with_books(0);
        let vm = state.compute_viewmodel(24);

        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn open_form_suppresses_empty_state() {
        let mut state = state_with_books(0);
        state.input_mode = InputMode::AddBook;

        let vm = state.compute_viewmodel(24);
        assert!(vm.empty_state.is_none());
        assert!(vm.form.is_some());
    }

    #[test]
    fn form_view_carries_per_field_errors() {
        let mut state = state_with_books(0);
        state.input_mode = InputMode::AddBook;
        state.form.errors = BookDraft::default().validate().unwrap_err();

        let vm = state.compute_viewmodel(24);
        let form = vm.form.unwrap();
        assert_eq!(
            form.fields[0].error.as_deref(),
            Some("Title is required")
        );
        assert_eq!(
            form.fields[2].error.as_deref(),
            Some("Pages is required")
        );
        assert!(form.fields[3].error.is_none());
    }

    #[test]
    fn status_dialog_marks_the_edited_row() {
        let mut state = state_with_books(2);
        let book_id = state.library.books()[1].id;
        state.input_mode = InputMode::EditStatus(StatusEdit {
            book_id,
            choice: ReadingStatus::Reading,
        });

        let vm = state.compute_viewmodel(24);
        assert!(vm.rows[1].is_editing);
        assert!(!vm.rows[0].is_editing);
        assert_eq!(
            vm.status_dialog.unwrap().choice_label,
            "Reading"
        );
    }

    #[test]
    fn clamp_pulls_cursor_back_after_tail_removal() {
        let mut state = state_with_books(3);
        state.selected_index = 2;

        let last = state.library.books()[2].id;
        state.library.remove(last);
        state.clamp_selection();

        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn truncate_cell_is_character_safe() {
        assert_eq!(truncate_cell("short", 10), "short");
        assert_eq!(truncate_cell("abcdefghij", 5), "abcd\u{2026}");
        // multi-byte characters must not split
        assert_eq!(truncate_cell("b\u{fc}cherregal", 5), "b\u{fc}ch\u{2026}");
    }
}
