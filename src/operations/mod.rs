//! Operation functors: one type per (container, verb) pair.
//!
//! Every functor implements [Operation] for the container it targets, so the measurement engine
//! can drive any of them without knowing the concrete container. Mutators return `()` and fail
//! with [ContainerError::Empty] when asked to remove from an empty container; searches look for a
//! target ISBN captured at construction and never fail.

use crate::{Book, errors::ContainerError};

pub mod bst;
pub mod dll;
pub mod hash_table;
pub mod sll;
pub mod vector;

// OPERATION
// ================================================================================================

/// A single-record operation applied to a container of type `C`.
pub trait Operation<C> {
    /// Value produced by a successful application; searches return a reference into the
    /// container.
    type Output<'c>
    where
        C: 'c;

    /// Applies the operation to `container`.
    ///
    /// `book` is the current sample element. Operations that do not need it (front/back removals
    /// and searches) ignore it.
    ///
    /// # Errors
    /// Returns [ContainerError::Empty] if a removal is attempted on an empty container.
    fn apply<'c>(
        &mut self,
        container: &'c mut C,
        book: &Book,
    ) -> Result<Self::Output<'c>, ContainerError>;
}

// PREAMBLE
// ================================================================================================

/// Untimed setup work performed on the container before each timed operation.
pub trait Preamble<C> {
    fn prepare(&mut self, container: &mut C, book: &Book);
}

impl<C, F> Preamble<C> for F
where
    F: FnMut(&mut C, &Book),
{
    fn prepare(&mut self, container: &mut C, book: &Book) {
        self(container, book)
    }
}

/// A [Preamble] that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreamble;

impl<C> Preamble<C> for NoPreamble {
    fn prepare(&mut self, _container: &mut C, _book: &Book) {}
}

// TEST FIXTURES
// ================================================================================================
