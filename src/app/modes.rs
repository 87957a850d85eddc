//! Input mode state types for the application.
//!
//! This module defines the state machine enum that controls user interaction.
//! The mode determines which keybindings are active, how character input is
//! processed, and which dialog (if any) is rendered over the table.
//!
//! # State Machine
//!
//! ```text
//! Browse ──open form (a)──────▶ AddBook ──submit/cancel──▶ Browse
//! Browse ──open dialog (Enter)─▶ EditStatus ──confirm/cancel──▶ Browse
//! ```
//!
//! The status-edit selection (which book, which candidate status) lives inside
//! the `EditStatus` variant itself. Leaving the dialog transitions back to
//! `Browse`, which destroys the selection: a confirm without an open dialog is
//! structurally a no-op rather than a read of stale pointers.

use crate::domain::{BookId, ReadingStatus};

/// Which add-book form field currently has focus.
///
/// Determines where typed characters and backspace land, and which field the
/// form renders highlighted. `Tab`/down and `Shift+Tab`/up cycle in
/// declaration order, wrapping at the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Book title text input.
    #[default]
    Title,
    /// Author text input.
    Author,
    /// Page count text input.
    Pages,
    /// Reading status choice (cycled with left/right, not typed).
    Status,
}

impl FormField {
    /// Returns the next field in focus order, wrapping from `Status` to `Title`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Pages,
            Self::Pages => Self::Status,
            Self::Status => Self::Title,
        }
    }

    /// Returns the previous field in focus order, wrapping from `Title` to `Status`.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Status,
            Self::Author => Self::Title,
            Self::Pages => Self::Author,
            Self::Status => Self::Pages,
        }
    }
}

/// An open status-edit dialog: the targeted book and the candidate status.
///
/// `choice` starts as the book's current status when the dialog opens and is
/// cycled by the user; it is only written back to the collection on confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEdit {
    /// Identity of the book being edited.
    pub book_id: BookId,
    /// Candidate status shown in the dialog.
    pub choice: ReadingStatus,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and which dialog box is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default table navigation mode.
    ///
    /// Available keybindings: j/k (navigate), a (add book), Enter/e (change
    /// status), d (remove), q (quit).
    #[default]
    Browse,

    /// The add-book form dialog is open.
    ///
    /// Characters edit the focused field; Tab moves focus; Enter submits;
    /// Esc cancels.
    AddBook,

    /// The change-status dialog is open for one book.
    ///
    /// j/k cycle the candidate status; Enter confirms; Esc cancels.
    EditStatus(StatusEdit),
}
