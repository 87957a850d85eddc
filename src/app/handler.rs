//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It serves as the
//! primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Key events arrive from the plugin runtime, already mapped per input mode
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `Library` methods
//! 4. A render flag and actions are returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Dialog lifecycle**: `OpenAddForm`, `OpenStatusEdit`, `Cancel`
//! - **Form input**: `Char`, `Backspace`, `NextField`, `PrevField`, `SubmitForm`
//! - **Choice cycling**: `CycleChoiceForward`, `CycleChoiceBackward`
//! - **Commits**: `ConfirmStatus`, `RemoveBook`
//! - **Host**: `CloseFocus`

use crate::app::{Action, AppState};
use crate::domain::error::Result;

use super::modes::{FormField, InputMode, StatusEdit};

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions: one event completes before the
/// next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the table cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the table cursor up by one row (wraps to bottom).
    KeyUp,
    /// Closes the plugin pane.
    CloseFocus,
    /// Opens the add-book form dialog.
    OpenAddForm,
    /// Opens the status-edit dialog for the book under the cursor.
    OpenStatusEdit,
    /// Removes the book under the cursor from the collection.
    RemoveBook,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Appends a character to the focused form text field.
    Char(char),
    /// Removes the last character from the focused form text field.
    Backspace,
    /// Cycles the status choice forward (form status field or edit dialog).
    CycleChoiceForward,
    /// Cycles the status choice backward (form status field or edit dialog).
    CycleChoiceBackward,
    /// Validates the form and, on success, adds the book to the collection.
    SubmitForm,
    /// Commits the status-edit dialog's choice into the targeted book.
    ConfirmStatus,
    /// Closes the open dialog without committing anything.
    Cancel,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions. It
/// pattern-matches on event types, calls state mutation methods, and returns a
/// render flag plus actions to be executed by the plugin runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: the flag is `true` when the UI changed; the
/// action list is empty for all events except [`Event::CloseFocus`].
///
/// # Errors
///
/// Currently infallible; the `Result` return matches the crate's handler
/// signature convention so callers treat all handlers uniformly.
///
/// # No-op guarantees
///
/// Events that make no sense in the current mode (a `ConfirmStatus` with no
/// open dialog, a `Char` while browsing) return `(false, [])` without touching
/// state or panicking.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenAddForm => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            tracing::debug!("opening add-book form");
            // buffers from a cancelled dialog are kept; stale messages are not
            state.form.errors.clear();
            state.form.focus = FormField::Title;
            state.input_mode = InputMode::AddBook;
            Ok((true, vec![]))
        }
        Event::OpenStatusEdit => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            let Some(book) = state.selected_book() else {
                tracing::debug!("no book under cursor, ignoring status edit");
                return Ok((false, vec![]));
            };

            tracing::debug!(
                book_id = %book.id,
                current_status = %book.status,
                "opening status-edit dialog"
            );
            state.input_mode = InputMode::EditStatus(StatusEdit {
                book_id: book.id,
                choice: book.status,
            });
            Ok((true, vec![]))
        }
        Event::RemoveBook => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            let Some(book) = state.selected_book() else {
                tracing::debug!("no book under cursor, ignoring remove");
                return Ok((false, vec![]));
            };

            let id = book.id;
            if state.library.remove(id).is_none() {
                return Ok((false, vec![]));
            }
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::NextField => {
            if state.input_mode != InputMode::AddBook {
                return Ok((false, vec![]));
            }
            state.form.focus = state.form.focus.next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            if state.input_mode != InputMode::AddBook {
                return Ok((false, vec![]));
            }
            state.form.focus = state.form.focus.prev();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::AddBook {
                return Ok((false, vec![]));
            }
            let Some(buffer) = state.form.focused_text_mut() else {
                return Ok((false, vec![]));
            };
            buffer.push(*c);
            tracing::trace!(char = %c, "form field updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::AddBook {
                return Ok((false, vec![]));
            }
            let Some(buffer) = state.form.focused_text_mut() else {
                return Ok((false, vec![]));
            };
            buffer.pop();
            Ok((true, vec![]))
        }
        Event::CycleChoiceForward => cycle_choice(state, true),
        Event::CycleChoiceBackward => cycle_choice(state, false),
        Event::SubmitForm => {
            if state.input_mode != InputMode::AddBook {
                return Ok((false, vec![]));
            }

            match state.form.draft.validate() {
                Ok(new_book) => {
                    let id = state.library.add(new_book);
                    state.form.clear();
                    state.input_mode = InputMode::Browse;
                    // land the cursor on the freshly added row
                    state.selected_index = state.library.position(id).unwrap_or(0);
                    Ok((true, vec![]))
                }
                Err(errors) => {
                    tracing::debug!(violation_count = errors.len(), "add-book form rejected");
                    state.form.errors = errors;
                    Ok((true, vec![]))
                }
            }
        }
        Event::ConfirmStatus => {
            let InputMode::EditStatus(StatusEdit { book_id, choice }) = state.input_mode else {
                tracing::debug!("confirm with no status edit active, ignoring");
                return Ok((false, vec![]));
            };

            state.library.set_status(book_id, choice);
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::Cancel => match state.input_mode {
            InputMode::AddBook => {
                tracing::debug!("add-book form cancelled");
                state.form.errors.clear();
                state.input_mode = InputMode::Browse;
                Ok((true, vec![]))
            }
            InputMode::EditStatus(_) => {
                tracing::debug!("status edit cancelled");
                state.input_mode = InputMode::Browse;
                Ok((true, vec![]))
            }
            InputMode::Browse => Ok((false, vec![])),
        },
    }
}

/// Cycles the active status choice in the direction given.
///
/// Applies to the form's status field when it has focus, and to an open
/// status-edit dialog. Anywhere else the event is ignored.
fn cycle_choice(state: &mut AppState, forward: bool) -> Result<(bool, Vec<Action>)> {
    match &mut state.input_mode {
        InputMode::AddBook if state.form.focus == FormField::Status => {
            let status = state.form.draft.status;
            state.form.draft.status = if forward { status.next() } else { status.prev() };
            Ok((true, vec![]))
        }
        InputMode::EditStatus(edit) => {
            edit.choice = if forward {
                edit.choice.next()
            } else {
                edit.choice.prev()
            };
            Ok((true, vec![]))
        }
        _ => Ok((false, vec![])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConstraintKind, ReadingStatus};
    use crate::ui::theme::Theme;

    fn empty_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn type_into(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    /// Drives the form end to end: open, fill every field, submit.
    fn add_book(state: &mut AppState, title: &str, author: &str, pages: &str) {
        handle_event(state, &Event::OpenAddForm).unwrap();
        type_into(state, title);
        handle_event(state, &Event::NextField).unwrap();
        type_into(state, author);
        handle_event(state, &Event::NextField).unwrap();
        type_into(state, pages);
        handle_event(state, &Event::SubmitForm).unwrap();
    }

    #[test]
    fn submitting_a_valid_form_adds_a_book_and_closes_the_dialog() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");

        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.library.len(), 1);

        let book = &state.library.books()[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.pages, 412);
        assert_eq!(book.status, ReadingStatus::ToBeRead);

        // buffers cleared for the next entry
        assert!(state.form.draft.title.is_empty());
        assert!(state.form.errors.is_empty());
    }

    #[test]
    fn invalid_submit_keeps_the_form_open_and_collection_untouched() {
        let mut state = empty_state();
        handle_event(&mut state, &Event::OpenAddForm).unwrap();
        type_into(&mut state, "Dune");
        // author and pages left empty
        let (rendered, _) = handle_event(&mut state, &Event::SubmitForm).unwrap();

        assert!(rendered);
        assert_eq!(state.input_mode, InputMode::AddBook);
        assert!(state.library.is_empty());
        assert_eq!(state.form.errors.len(), 2);
    }

    #[test]
    fn all_violations_surface_in_one_submit() {
        let mut state = empty_state();
        handle_event(&mut state, &Event::OpenAddForm).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        type_into(&mut state, "lots");
        handle_event(&mut state, &Event::SubmitForm).unwrap();

        let kinds: Vec<ConstraintKind> = state.form.errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConstraintKind::ValueMissing,
                ConstraintKind::ValueMissing,
                ConstraintKind::NotANumber,
            ]
        );
    }

    #[test]
    fn status_choice_cycles_in_the_form() {
        let mut state = empty_state();
        handle_event(&mut state, &Event::OpenAddForm).unwrap();
        // focus the status field (Title -> Author -> Pages -> Status)
        for _ in 0..3 {
            handle_event(&mut state, &Event::NextField).unwrap();
        }
        handle_event(&mut state, &Event::CycleChoiceForward).unwrap();

        assert_eq!(state.form.draft.status, ReadingStatus::Reading);

        handle_event(&mut state, &Event::CycleChoiceBackward).unwrap();
        assert_eq!(state.form.draft.status, ReadingStatus::ToBeRead);
    }

    #[test]
    fn typed_characters_are_ignored_while_status_field_is_focused() {
        let mut state = empty_state();
        handle_event(&mut state, &Event::OpenAddForm).unwrap();
        for _ in 0..3 {
            handle_event(&mut state, &Event::NextField).unwrap();
        }

        let (rendered, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!rendered);
        assert!(state.form.draft.title.is_empty());
    }

    #[test]
    fn cancel_keeps_buffers_but_drops_error_messages() {
        let mut state = empty_state();
        handle_event(&mut state, &Event::OpenAddForm).unwrap();
        type_into(&mut state, "Du");
        handle_event(&mut state, &Event::SubmitForm).unwrap();
        assert!(!state.form.errors.is_empty());

        handle_event(&mut state, &Event::Cancel).unwrap();
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.form.draft.title, "Du");
        assert!(state.form.errors.is_empty());
    }

    #[test]
    fn confirming_a_status_change_updates_record_and_rendered_cell() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");

        handle_event(&mut state, &Event::OpenStatusEdit).unwrap();
        handle_event(&mut state, &Event::CycleChoiceForward).unwrap();
        handle_event(&mut state, &Event::ConfirmStatus).unwrap();

        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.library.len(), 1);
        assert_eq!(state.library.books()[0].status, ReadingStatus::Reading);

        let vm = state.compute_viewmodel(24);
        assert_eq!(vm.rows[0].status_label, "Reading");
    }

    #[test]
    fn confirm_with_no_selection_is_a_no_op() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");

        let (rendered, actions) = handle_event(&mut state, &Event::ConfirmStatus).unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.library.books()[0].status, ReadingStatus::ToBeRead);
    }

    #[test]
    fn cancelling_the_dialog_leaves_the_status_unchanged() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");

        handle_event(&mut state, &Event::OpenStatusEdit).unwrap();
        handle_event(&mut state, &Event::CycleChoiceForward).unwrap();
        handle_event(&mut state, &Event::Cancel).unwrap();

        assert_eq!(state.library.books()[0].status, ReadingStatus::ToBeRead);
        // leaving the dialog destroyed the selection, so a stray confirm
        // cannot touch the book
        let (rendered, _) = handle_event(&mut state, &Event::ConfirmStatus).unwrap();
        assert!(!rendered);
    }

    #[test]
    fn dialog_pre_populates_with_the_current_status() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");
        let id = state.library.books()[0].id;
        state.library.set_status(id, ReadingStatus::Read);

        handle_event(&mut state, &Event::OpenStatusEdit).unwrap();
        let InputMode::EditStatus(edit) = state.input_mode else {
            panic!("expected status edit mode");
        };
        assert_eq!(edit.choice, ReadingStatus::Read);
    }

    #[test]
    fn removing_a_book_keeps_rows_and_collection_in_lockstep() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");
        add_book(&mut state, "Hyperion", "Simmons", "482");
        add_book(&mut state, "Ubik", "Dick", "224");

        state.selected_index = 0;
        handle_event(&mut state, &Event::RemoveBook).unwrap();

        assert_eq!(state.library.len(), 2);
        let vm = state.compute_viewmodel(24);
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].title, "Hyperion");
        assert_eq!(vm.rows[1].title, "Ubik");
    }

    #[test]
    fn removing_the_last_row_clamps_the_cursor() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");
        add_book(&mut state, "Hyperion", "Simmons", "482");

        state.selected_index = 1;
        handle_event(&mut state, &Event::RemoveBook).unwrap();

        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_book().unwrap().title, "Dune");
    }

    #[test]
    fn remove_on_empty_library_is_a_no_op() {
        let mut state = empty_state();
        let (rendered, actions) = handle_event(&mut state, &Event::RemoveBook).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn open_status_edit_on_empty_library_is_a_no_op() {
        let mut state = empty_state();
        let (rendered, _) = handle_event(&mut state, &Event::OpenStatusEdit).unwrap();
        assert!(!rendered);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn navigation_is_ignored_while_a_dialog_is_open() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");
        add_book(&mut state, "Hyperion", "Simmons", "482");
        state.selected_index = 0;

        handle_event(&mut state, &Event::OpenStatusEdit).unwrap();
        let (rendered, _) = handle_event(&mut state, &Event::KeyDown).unwrap();

        assert!(!rendered);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn close_focus_emits_the_close_action() {
        let mut state = empty_state();
        let (rendered, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn submit_selects_the_newly_added_row() {
        let mut state = empty_state();
        add_book(&mut state, "Dune", "Herbert", "412");
        add_book(&mut state, "Hyperion", "Simmons", "482");

        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_book().unwrap().title, "Hyperion");
    }
}
