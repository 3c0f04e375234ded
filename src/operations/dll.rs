//! Operations on a doubly linked list.

use super::Operation;
use crate::{Book, containers::Dll, errors::ContainerError};

const CONTAINER: &str = "doubly linked list";

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertAtBack;

impl Operation<Dll> for InsertAtBack {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Dll, book: &Book) -> Result<(), ContainerError> {
        list.push_back(book.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertAtFront;

impl Operation<Dll> for InsertAtFront {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Dll, book: &Book) -> Result<(), ContainerError> {
        list.push_front(book.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFromBack;

impl Operation<Dll> for RemoveFromBack {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Dll, _book: &Book) -> Result<(), ContainerError> {
        list.pop_back().map(drop).ok_or(ContainerError::Empty { container: CONTAINER })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFromFront;

impl Operation<Dll> for RemoveFromFront {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Dll, _book: &Book) -> Result<(), ContainerError> {
        list.pop_front().map(drop).ok_or(ContainerError::Empty { container: CONTAINER })
    }
}

/// Walks the list front to back looking for the target ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    target: String,
}

impl Search {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Operation<Dll> for Search {
    type Output<'c> = Option<&'c Book>;

    fn apply<'c>(
        &mut self,
        list: &'c mut Dll,
        _book: &Book,
    ) -> Result<Option<&'c Book>, ContainerError> {
        Ok(list.iter().find(|book| book.isbn() == self.target))
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::operations::fixtures::{book, other_book, unused_book};

    fn dll(books: &[Book]) -> Dll {
        books.iter().cloned().collect()
    }

    #[test]
    fn insert_at_back() {
        let mut list = Dll::new();
        InsertAtBack.apply(&mut list, &book()).unwrap();
        assert_eq!(list, dll(&[book()]));

        let mut list = dll(&[other_book(), other_book()]);
        InsertAtBack.apply(&mut list, &book()).unwrap();
        assert_eq!(list, dll(&[other_book(), other_book(), book()]));
    }

    #[test]
    fn insert_at_front() {
        let mut list = dll(&[other_book(), other_book()]);
        InsertAtFront.apply(&mut list, &book()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&book()));
        assert_eq!(list.back(), Some(&other_book()));
    }

    #[test]
    fn remove_from_back() {
        let mut list = Dll::new();
        assert_matches!(
            RemoveFromBack.apply(&mut list, &unused_book()),
            Err(ContainerError::Empty { container: "doubly linked list" })
        );

        let mut list = dll(&[other_book(), other_book(), book()]);
        RemoveFromBack.apply(&mut list, &unused_book()).unwrap();
        assert_eq!(list, dll(&[other_book(), other_book()]));
    }

    #[test]
    fn remove_from_front() {
        let mut list = Dll::new();
        assert!(RemoveFromFront.apply(&mut list, &unused_book()).is_err());
        assert!(RemoveFromFront.apply(&mut list, &unused_book()).is_err());

        let mut list = dll(&[book(), other_book()]);
        RemoveFromFront.apply(&mut list, &unused_book()).unwrap();
        assert_eq!(list, dll(&[other_book()]));
    }

    #[test]
    fn search_returns_the_stored_instance() {
        let mut list = dll(&[other_book(), book()]);
        let expected: *const Book = list.back().unwrap();

        let found = Search::new("isbn").apply(&mut list, &unused_book()).unwrap();
        assert!(found.is_some_and(|found| core::ptr::eq(found, expected)));

        assert_eq!(Search::new("non-existent").apply(&mut list, &unused_book()), Ok(None));
    }
}
