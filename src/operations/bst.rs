//! Operations on an ordered tree keyed by ISBN.

use super::Operation;
use crate::{Book, containers::Bst, errors::ContainerError};

const CONTAINER: &str = "binary search tree";

/// Inserts the book under its ISBN, replacing any book already stored under that key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

impl Operation<Bst> for Insert {
    type Output<'c> = ();

    fn apply<'c>(&mut self, tree: &'c mut Bst, book: &Book) -> Result<(), ContainerError> {
        tree.insert(book.isbn().to_owned(), book.clone());
        Ok(())
    }
}

/// Removes the book stored under the ISBN of the given book.
///
/// A missing key leaves the tree untouched; an empty tree is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Remove;

impl Operation<Bst> for Remove {
    type Output<'c> = ();

    fn apply<'c>(&mut self, tree: &'c mut Bst, book: &Book) -> Result<(), ContainerError> {
        if tree.is_empty() {
            return Err(ContainerError::Empty { container: CONTAINER });
        }
        tree.remove(book.isbn());
        Ok(())
    }
}

/// Keyed lookup of the target ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    target: String,
}

impl Search {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Operation<Bst> for Search {
    type Output<'c> = Option<&'c Book>;

    fn apply<'c>(
        &mut self,
        tree: &'c mut Bst,
        _book: &Book,
    ) -> Result<Option<&'c Book>, ContainerError> {
        Ok(tree.get(&self.target))
    }
}

// TESTS
// ================================================================================================
