//! The in-memory book collection.
//!
//! This module defines [`Library`], the ordered, owned collection of
//! [`Book`] records behind the table view. Insertion order is display order.
//! Every book receives a stable [`BookId`] at insertion, and all mutation goes
//! through identity-based methods, so the table can always be re-derived from
//! the collection without any row/index bookkeeping.

use super::book::{Book, BookId, ReadingStatus};
use super::draft::NewBook;

/// Ordered collection of books, insertion order = display order.
///
/// The collection is owned by the application state and holds no global or
/// shared data. Removal shifts subsequent entries left; their positions are
/// recomputed from the vector on demand rather than stored on the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
    next_id: u64,
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated book to the end of the collection.
    ///
    /// Assigns and returns the next stable id. Always succeeds: [`NewBook`]
    /// can only be obtained from a draft that passed validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use zhelf::domain::{BookDraft, Library, ReadingStatus};
    ///
    /// let mut library = Library::new();
    /// let draft = BookDraft {
    ///     title: "Dune".to_string(),
    ///     author: "Herbert".to_string(),
    ///     pages: "412".to_string(),
    ///     status: ReadingStatus::ToBeRead,
    /// };
    /// let id = library.add(draft.validate().unwrap());
    ///
    /// assert_eq!(library.len(), 1);
    /// assert_eq!(library.get(id).unwrap().title, "Dune");
    /// ```
    pub fn add(&mut self, new: NewBook) -> BookId {
        let id = BookId(self.next_id);
        self.next_id += 1;

        tracing::debug!(
            book_id = %id,
            title = %new.title,
            "adding book to library"
        );

        self.books.push(Book {
            id,
            title: new.title,
            author: new.author,
            pages: new.pages,
            status: new.status,
        });

        id
    }

    /// Removes the book with the given id, shifting subsequent books left.
    ///
    /// Returns the removed book, or `None` if the id is unknown. Relative
    /// order of the remaining books is preserved.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let index = self.position(id)?;
        let book = self.books.remove(index);

        tracing::debug!(
            book_id = %id,
            index = index,
            remaining = self.books.len(),
            "removed book from library"
        );

        Some(book)
    }

    /// Writes a new status into the book with the given id.
    ///
    /// Returns `true` if the book exists and was updated, `false` for an
    /// unknown id. The collection length is never affected.
    pub fn set_status(&mut self, id: BookId, status: ReadingStatus) -> bool {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            tracing::debug!(book_id = %id, "status change for unknown book ignored");
            return false;
        };

        tracing::debug!(
            book_id = %id,
            old_status = %book.status,
            new_status = %status,
            "updating book status"
        );

        book.status = status;
        true
    }

    /// Returns the book with the given id, if present.
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Returns the current 0-based position of the book with the given id.
    ///
    /// Positions are derived, never stored: after any removal they are
    /// contiguous with no gaps by construction.
    #[must_use]
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Returns all books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` when the collection holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::BookDraft;

    fn new_book(title: &str, author: &str, pages: &str, status: ReadingStatus) -> NewBook {
        BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            pages: pages.to_string(),
            status,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut library = Library::new();
        library.add(new_book("Dune", "Herbert", "412", ReadingStatus::ToBeRead));
        library.add(new_book("Hyperion", "Simmons", "482", ReadingStatus::Reading));

        let titles: Vec<&str> = library.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Hyperion"]);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn removing_first_book_shifts_positions_left() {
        let mut library = Library::new();
        let dune = library.add(new_book("Dune", "Herbert", "412", ReadingStatus::ToBeRead));
        let hyperion =
            library.add(new_book("Hyperion", "Simmons", "482", ReadingStatus::Reading));

        let removed = library.remove(dune).unwrap();
        assert_eq!(removed.title, "Dune");

        assert_eq!(library.len(), 1);
        assert_eq!(library.position(hyperion), Some(0));
        assert_eq!(library.books()[0].title, "Hyperion");
    }

    #[test]
    fn removing_middle_book_keeps_positions_contiguous() {
        let mut library = Library::new();
        let ids: Vec<BookId> = (0..5)
            .map(|i| {
                library.add(new_book(
                    &format!("Book {i}"),
                    "Author",
                    "100",
                    ReadingStatus::ToBeRead,
                ))
            })
            .collect();

        library.remove(ids[2]);

        let positions: Vec<Option<usize>> =
            ids.iter().map(|&id| library.position(id)).collect();
        assert_eq!(
            positions,
            vec![Some(0), Some(1), None, Some(2), Some(3)]
        );
    }

    #[test]
    fn ids_stay_stable_across_removals() {
        let mut library = Library::new();
        let first = library.add(new_book("Dune", "Herbert", "412", ReadingStatus::ToBeRead));
        let second =
            library.add(new_book("Hyperion", "Simmons", "482", ReadingStatus::Reading));

        library.remove(first);
        let third = library.add(new_book("Ubik", "Dick", "224", ReadingStatus::ToBeRead));

        assert_ne!(third, first);
        assert_ne!(third, second);
        assert_eq!(library.get(second).unwrap().title, "Hyperion");
    }

    #[test]
    fn remove_unknown_id_returns_none_and_leaves_collection_alone() {
        let mut library = Library::new();
        let id = library.add(new_book("Dune", "Herbert", "412", ReadingStatus::ToBeRead));
        library.remove(id);

        assert_eq!(library.remove(id), None);
        assert!(library.is_empty());
    }

    #[test]
    fn set_status_updates_record_without_changing_length() {
        let mut library = Library::new();
        let id = library.add(new_book("Dune", "Herbert", "412", ReadingStatus::ToBeRead));

        assert!(library.set_status(id, ReadingStatus::Read));
        assert_eq!(library.get(id).unwrap().status, ReadingStatus::Read);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn set_status_on_unknown_id_is_a_no_op() {
        let mut library = Library::new();
        let id = library.add(new_book("Dune", "Herbert", "412", ReadingStatus::ToBeRead));
        library.remove(id);

        assert!(!library.set_status(id, ReadingStatus::Read));
        assert!(library.is_empty());
    }
}
