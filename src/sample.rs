//! Sample provider: the fixed, shuffled sequence of records replayed against every container.

use std::{
    collections::HashSet,
    io::{self, BufRead},
};

use core::ops::Deref;

use rand::seq::SliceRandom;
use rand_core::RngCore;

use crate::book::{Book, parse_book};

// SAMPLE DATA
// ================================================================================================

/// An immutable, randomly permuted sequence of [Book]s.
///
/// Records are deduplicated by ISBN, keeping the first occurrence, so keyed containers filled from
/// the sample hold exactly one entry per element. Once built the sequence is never mutated, so
/// every measured container sees the same input order. The backing storage carries no spare
/// capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    books: Vec<Book>,
}

impl SampleData {
    /// Builds a sample from `books`, shuffled with a non-deterministically seeded generator.
    pub fn new(books: impl IntoIterator<Item = Book>) -> Self {
        Self::with_rng(books, &mut rand::thread_rng())
    }

    /// Builds a sample from `books`, shuffled with the provided generator.
    ///
    /// Books repeating an ISBN seen earlier in `books` are dropped.
    pub fn with_rng<R: RngCore + ?Sized>(books: impl IntoIterator<Item = Book>, rng: &mut R) -> Self {
        let mut seen = HashSet::new();
        let mut books: Vec<Book> =
            books.into_iter().filter(|book| seen.insert(book.isbn().to_owned())).collect();
        books.shrink_to_fit();
        books.shuffle(rng);
        Self { books }
    }

    /// Reads one record per line from `reader` and shuffles the result with a non-deterministically
    /// seeded generator.
    ///
    /// See [Self::read_with_rng] for the parsing rules.
    pub fn read<B: BufRead>(reader: B) -> io::Result<Self> {
        Self::read_with_rng(reader, &mut rand::thread_rng())
    }

    /// Reads one record per line from `reader` and shuffles the result with `rng`.
    ///
    /// Blank lines are skipped. Collection stops silently at the first line that fails to parse
    /// (or is not valid UTF-8); everything after it is ignored.
    ///
    /// # Errors
    /// Returns an error only if the underlying reader fails for reasons other than malformed
    /// input.
    pub fn read_with_rng<B: BufRead, R: RngCore + ?Sized>(
        reader: B,
        rng: &mut R,
    ) -> io::Result<Self> {
        let mut books = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    tracing::debug!(line = number + 1, "stopping sample collection at non UTF-8 input");
                    break;
                },
                Err(err) => return Err(err),
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_book(&line) {
                Ok(book) => books.push(book),
                Err(err) => {
                    tracing::debug!(line = number + 1, %err, "stopping sample collection at malformed record");
                    break;
                },
            }
        }

        tracing::debug!(records = books.len(), "loaded sample records");
        Ok(Self::with_rng(books, rng))
    }

    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    pub fn into_inner(self) -> Vec<Book> {
        self.books
    }
}

impl Deref for SampleData {
    type Target = [Book];

    fn deref(&self) -> &Self::Target {
        &self.books
    }
}

impl<'a> IntoIterator for &'a SampleData {
    type Item = &'a Book;
    type IntoIter = core::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

// TESTS
// ================================================================================================
