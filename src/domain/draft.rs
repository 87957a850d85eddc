//! Form draft validation.
//!
//! This module defines [`BookDraft`], the raw text captured by the add-book form,
//! and its validation into a [`NewBook`] payload that the collection accepts
//! unconditionally. Validation mirrors native form-constraint checking: every
//! field is checked and all violations are reported at once, each keyed by a
//! [`ConstraintKind`] that maps to a human-readable per-field message.

use super::book::ReadingStatus;
use std::fmt;

/// Minimum character length for the title field.
pub const TITLE_MIN_LEN: usize = 2;

/// Minimum character length for the author field.
pub const AUTHOR_MIN_LEN: usize = 2;

/// Minimum accepted page count.
pub const MIN_PAGES: u32 = 1;

/// The form fields that can carry a constraint violation.
///
/// The status field is a closed choice and cannot fail validation, so it does
/// not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Pages,
}

impl Field {
    /// Returns the field label used in messages and form rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Pages => "Pages",
        }
    }
}

/// The kind of constraint a field value violated.
///
/// Kinds follow the native form-validation vocabulary: a missing required
/// value, a value shorter than the minimum length, a non-numeric value in a
/// numeric field, and a numeric value below the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Required field is empty (after trimming).
    ValueMissing,
    /// Value is shorter than the minimum length.
    TooShort { min: usize },
    /// Value in a numeric field is not an integer.
    NotANumber,
    /// Numeric value is below the minimum.
    Underflow { min: u32 },
}

/// A single constraint violation: which field, and which constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ConstraintKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.kind {
            ConstraintKind::ValueMissing => write!(f, "{label} is required"),
            ConstraintKind::TooShort { min } => {
                write!(f, "{label} must be at least {min} characters")
            }
            ConstraintKind::NotANumber => write!(f, "{label} must be a number"),
            ConstraintKind::Underflow { min } => write!(f, "{label} must be at least {min}"),
        }
    }
}

/// A validated add-book payload.
///
/// Strings are trimmed and non-empty, `pages` is at least [`MIN_PAGES`].
/// [`Library::add`](crate::domain::Library::add) accepts this type and always
/// succeeds, matching the original widget where the collection never rejected
/// a book that passed form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub status: ReadingStatus,
}

/// Raw field values captured from the add-book form.
///
/// Text fields hold whatever the user typed; `status` is already a closed
/// choice. [`validate`](Self::validate) turns a draft into a [`NewBook`] or a
/// complete list of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub status: ReadingStatus,
}

impl BookDraft {
    /// Validates every field and aggregates all violations.
    ///
    /// Checks run field by field in declaration order and never short-circuit:
    /// a draft with an empty title and a non-numeric page count reports both
    /// problems in one pass, matching the validated variant of the original
    /// widget.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per violating field. A field reports only its
    /// first violated constraint (a value cannot be both missing and too
    /// short).
    ///
    /// # Examples
    ///
    /// ```
    /// use zhelf::domain::{BookDraft, ReadingStatus};
    ///
    /// let draft = BookDraft {
    ///     title: "Dune".to_string(),
    ///     author: "Herbert".to_string(),
    ///     pages: "412".to_string(),
    ///     status: ReadingStatus::ToBeRead,
    /// };
    ///
    /// let book = draft.validate().unwrap();
    /// assert_eq!(book.pages, 412);
    /// ```
    pub fn validate(&self) -> Result<NewBook, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if let Some(kind) = check_text(title, TITLE_MIN_LEN) {
            errors.push(FieldError {
                field: Field::Title,
                kind,
            });
        }

        let author = self.author.trim();
        if let Some(kind) = check_text(author, AUTHOR_MIN_LEN) {
            errors.push(FieldError {
                field: Field::Author,
                kind,
            });
        }

        let pages = match check_pages(self.pages.trim()) {
            Ok(pages) => Some(pages),
            Err(kind) => {
                errors.push(FieldError {
                    field: Field::Pages,
                    kind,
                });
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            // check_pages succeeded when errors is empty
            pages: pages.unwrap_or(MIN_PAGES),
            status: self.status,
        })
    }
}

/// Checks a required text field against its minimum length.
fn check_text(value: &str, min_len: usize) -> Option<ConstraintKind> {
    if value.is_empty() {
        Some(ConstraintKind::ValueMissing)
    } else if value.chars().count() < min_len {
        Some(ConstraintKind::TooShort { min: min_len })
    } else {
        None
    }
}

/// Checks the pages field: required, numeric, at least [`MIN_PAGES`].
///
/// Parses through `i64` so that a negative count reports [`ConstraintKind::Underflow`]
/// rather than a parse failure, matching how native number inputs classify
/// below-range values.
fn check_pages(value: &str) -> Result<u32, ConstraintKind> {
    if value.is_empty() {
        return Err(ConstraintKind::ValueMissing);
    }

    let parsed: i64 = value
        .parse()
        .map_err(|_| ConstraintKind::NotANumber)?;

    if parsed < i64::from(MIN_PAGES) {
        return Err(ConstraintKind::Underflow { min: MIN_PAGES });
    }

    u32::try_from(parsed).map_err(|_| ConstraintKind::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookDraft {
        BookDraft {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            pages: "412".to_string(),
            status: ReadingStatus::ToBeRead,
        }
    }

    #[test]
    fn valid_draft_produces_trimmed_payload() {
        let draft = BookDraft {
            title: "  Dune ".to_string(),
            author: " Herbert".to_string(),
            pages: " 412 ".to_string(),
            status: ReadingStatus::Reading,
        };

        let book = draft.validate().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.pages, 412);
        assert_eq!(book.status, ReadingStatus::Reading);
    }

    #[test]
    fn empty_title_reports_value_missing() {
        let draft = BookDraft {
            title: String::new(),
            ..valid_draft()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Title);
        assert_eq!(errors[0].kind, ConstraintKind::ValueMissing);
    }

    #[test]
    fn whitespace_only_author_counts_as_missing() {
        let draft = BookDraft {
            author: "   ".to_string(),
            ..valid_draft()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors[0].field, Field::Author);
        assert_eq!(errors[0].kind, ConstraintKind::ValueMissing);
    }

    #[test]
    fn one_character_title_is_too_short() {
        let draft = BookDraft {
            title: "D".to_string(),
            ..valid_draft()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors[0].kind,
            ConstraintKind::TooShort { min: TITLE_MIN_LEN }
        );
    }

    #[test]
    fn non_numeric_pages_reports_not_a_number() {
        let draft = BookDraft {
            pages: "many".to_string(),
            ..valid_draft()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors[0].field, Field::Pages);
        assert_eq!(errors[0].kind, ConstraintKind::NotANumber);
    }

    #[test]
    fn zero_and_negative_pages_report_underflow() {
        for raw in ["0", "-3"] {
            let draft = BookDraft {
                pages: raw.to_string(),
                ..valid_draft()
            };

            let errors = draft.validate().unwrap_err();
            assert_eq!(
                errors[0].kind,
                ConstraintKind::Underflow { min: MIN_PAGES },
                "pages = {raw:?}"
            );
        }
    }

    #[test]
    fn all_violations_are_reported_at_once() {
        let draft = BookDraft {
            title: String::new(),
            author: "X".to_string(),
            pages: "twelve".to_string(),
            status: ReadingStatus::ToBeRead,
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 3);

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Title, Field::Author, Field::Pages]);
        assert_eq!(errors[0].kind, ConstraintKind::ValueMissing);
        assert_eq!(
            errors[1].kind,
            ConstraintKind::TooShort {
                min: AUTHOR_MIN_LEN
            }
        );
        assert_eq!(errors[2].kind, ConstraintKind::NotANumber);
    }

    #[test]
    fn messages_are_keyed_by_constraint_kind() {
        let missing = FieldError {
            field: Field::Title,
            kind: ConstraintKind::ValueMissing,
        };
        let short = FieldError {
            field: Field::Author,
            kind: ConstraintKind::TooShort { min: 2 },
        };
        let nan = FieldError {
            field: Field::Pages,
            kind: ConstraintKind::NotANumber,
        };
        let low = FieldError {
            field: Field::Pages,
            kind: ConstraintKind::Underflow { min: 1 },
        };

        assert_eq!(missing.to_string(), "Title is required");
        assert_eq!(short.to_string(), "Author must be at least 2 characters");
        assert_eq!(nan.to_string(), "Pages must be a number");
        assert_eq!(low.to_string(), "Pages must be at least 1");
    }
}
