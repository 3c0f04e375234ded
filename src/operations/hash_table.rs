//! Operations on a hash table keyed by ISBN.

use super::Operation;
use crate::{Book, containers::HashTable, errors::ContainerError};

const CONTAINER: &str = "hash table";

#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

impl Operation<HashTable> for Insert {
    type Output<'c> = ();

    fn apply<'c>(&mut self, table: &'c mut HashTable, book: &Book) -> Result<(), ContainerError> {
        table.insert(book.isbn().to_owned(), book.clone());
        Ok(())
    }
}

/// Removes the book stored under the ISBN of the given book, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct Remove;

impl Operation<HashTable> for Remove {
    type Output<'c> = ();

    fn apply<'c>(&mut self, table: &'c mut HashTable, book: &Book) -> Result<(), ContainerError> {
        if table.is_empty() {
            return Err(ContainerError::Empty { container: CONTAINER });
        }
        table.remove(book.isbn());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    target: String,
}

impl Search {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Operation<HashTable> for Search {
    type Output<'c> = Option<&'c Book>;

    fn apply<'c>(
        &mut self,
        table: &'c mut HashTable,
        _book: &Book,
    ) -> Result<Option<&'c Book>, ContainerError> {
        Ok(table.get(&self.target))
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::operations::fixtures::{book, numbered, other_book, unused_book};

    #[test]
    fn insert() {
        let mut table = HashTable::new();
        Insert.apply(&mut table, &book()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["isbn"], book());

        Insert.apply(&mut table, &other_book()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["other-isbn"], other_book());
    }

    #[test]
    fn remove() {
        let mut table = HashTable::new();
        assert_matches!(
            Remove.apply(&mut table, &book()),
            Err(ContainerError::Empty { container: "hash table" })
        );

        Insert.apply(&mut table, &book()).unwrap();
        Remove.apply(&mut table, &unused_book()).unwrap();
        assert_eq!(table.len(), 1);

        Remove.apply(&mut table, &book()).unwrap();
        assert!(table.is_empty());
        assert!(Remove.apply(&mut table, &book()).is_err());
    }

    #[test]
    fn search_returns_the_stored_instance() {
        let mut table = HashTable::new();
        Insert.apply(&mut table, &book()).unwrap();
        let expected: *const Book = &table["isbn"];

        let found = Search::new("isbn").apply(&mut table, &unused_book()).unwrap();
        assert!(found.is_some_and(|found| core::ptr::eq(found, expected)));

        assert_eq!(Search::new("non-existent").apply(&mut table, &unused_book()), Ok(None));
    }

    proptest! {
        #[test]
        fn prop_shrinking_removal_empties_the_table(count in 1usize..64) {
            let books = numbered(count);
            let mut table: HashTable =
                books.iter().map(|book| (book.isbn().to_owned(), book.clone())).collect();

            for book in &books {
                Remove.apply(&mut table, book).unwrap();
            }
            prop_assert!(table.is_empty());
            prop_assert!(Remove.apply(&mut table, &books[0]).is_err());
        }
    }
}
