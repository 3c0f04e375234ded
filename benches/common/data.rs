//! Record generation utilities for consistent benchmark inputs.
//!
//! Sequential records are fully determined by their index; random records draw their price and
//! the suffix of their text fields from [rand_value], while keeping ISBNs unique so keyed
//! containers hold every record.

use container_bench::{Book, SampleData};
use rand_utils::rand_value;

/// Generate a record fully determined by `i`
pub fn generate_book_sequential(i: usize) -> Book {
    Book::new(format!("title {i}"), format!("author {i}"), format!("{i:013}"), i as f64)
}

/// Generate a record with a unique ISBN and random remaining fields
pub fn generate_book_random(i: usize) -> Book {
    let salt = rand_value::<u64>();
    let price = (rand_value::<u32>() % 100_000) as f64 / 100.0;
    Book::new(format!("title {salt:x}"), format!("author {salt:o}"), format!("{i:013}"), price)
}

/// Generate `count` sequential records
pub fn generate_books_sequential(count: usize) -> Vec<Book> {
    (0..count).map(generate_book_sequential).collect()
}

/// Generate `count` random records
pub fn generate_books_random(count: usize) -> Vec<Book> {
    (0..count).map(generate_book_random).collect()
}

/// Generate a shuffled sample of `count` random records
pub fn generate_sample(count: usize) -> SampleData {
    SampleData::new(generate_books_random(count))
}

/// Pair every record with its ISBN, the layout used by the keyed containers
pub fn keyed<C>(books: &[Book]) -> C
where
    C: FromIterator<(String, Book)>,
{
    books.iter().map(|book| (book.isbn().to_owned(), book.clone())).collect()
}
