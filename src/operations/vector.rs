//! Operations on a contiguous array.

use super::Operation;
use crate::{Book, containers::Vector, errors::ContainerError};

const CONTAINER: &str = "vector";

/// Appends the book to the end of the vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertAtBack;

impl Operation<Vector> for InsertAtBack {
    type Output<'c> = ();

    fn apply<'c>(&mut self, vector: &'c mut Vector, book: &Book) -> Result<(), ContainerError> {
        vector.push(book.clone());
        Ok(())
    }
}

/// Inserts the book at index 0, shifting every existing element.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertAtFront;

impl Operation<Vector> for InsertAtFront {
    type Output<'c> = ();

    fn apply<'c>(&mut self, vector: &'c mut Vector, book: &Book) -> Result<(), ContainerError> {
        vector.insert(0, book.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFromBack;

impl Operation<Vector> for RemoveFromBack {
    type Output<'c> = ();

    fn apply<'c>(&mut self, vector: &'c mut Vector, _book: &Book) -> Result<(), ContainerError> {
        vector.pop().map(drop).ok_or(ContainerError::Empty { container: CONTAINER })
    }
}

/// Removes the element at index 0, shifting every remaining element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFromFront;

impl Operation<Vector> for RemoveFromFront {
    type Output<'c> = ();

    fn apply<'c>(&mut self, vector: &'c mut Vector, _book: &Book) -> Result<(), ContainerError> {
        if vector.is_empty() {
            return Err(ContainerError::Empty { container: CONTAINER });
        }
        vector.remove(0);
        Ok(())
    }
}

/// Linear scan for the first book whose ISBN matches the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    target: String,
}

impl Search {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Operation<Vector> for Search {
    type Output<'c> = Option<&'c Book>;

    fn apply<'c>(
        &mut self,
        vector: &'c mut Vector,
        _book: &Book,
    ) -> Result<Option<&'c Book>, ContainerError> {
        Ok(vector.iter().find(|book| book.isbn() == self.target))
    }
}

// TESTS
// ================================================================================================
