//! Operations on a singly linked list.
//!
//! The list keeps no tail pointer, so both back operations walk the whole list.

use super::Operation;
use crate::{Book, containers::Sll, errors::ContainerError};

const CONTAINER: &str = "singly linked list";

/// Walks to the last node and links the book after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertAtBack;

impl Operation<Sll> for InsertAtBack {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Sll, book: &Book) -> Result<(), ContainerError> {
        list.push_back(book.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertAtFront;

impl Operation<Sll> for InsertAtFront {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Sll, book: &Book) -> Result<(), ContainerError> {
        list.push_front(book.clone());
        Ok(())
    }
}

/// Walks to the predecessor of the last node and unlinks its successor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFromBack;

impl Operation<Sll> for RemoveFromBack {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Sll, _book: &Book) -> Result<(), ContainerError> {
        list.pop_back().map(drop).ok_or(ContainerError::Empty { container: CONTAINER })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveFromFront;

impl Operation<Sll> for RemoveFromFront {
    type Output<'c> = ();

    fn apply<'c>(&mut self, list: &'c mut Sll, _book: &Book) -> Result<(), ContainerError> {
        list.pop_front().map(drop).ok_or(ContainerError::Empty { container: CONTAINER })
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

impl Operation<Sll> for Search {
    type Output<'c> = Option<&'c Book>;

    fn apply<'c>(
        &mut self,
        list: &'c mut Sll,
        _book: &Book,
    ) -> Result<Option<&'c Book>, ContainerError> {
        Ok(list.iter().find(|book| book.isbn() == self.target))
    }
}

// TESTS
// ================================================================================================
