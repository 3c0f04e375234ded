//! Micro-benchmark harness measuring the cost of insertion, removal and search across a set of
//! general purpose containers as they grow or shrink over a fixed, shuffled sample of records.
//!
//! The pieces fit together as follows:
//! - [SampleData] loads and shuffles the records that every measurement replays.
//! - [operations] provides one functor per (container, verb) pair behind the [Operation] trait.
//! - [measure()] times each application of an operation and accumulates the result into a
//!   [TimeMatrix], bucketed by the size of the container at the time of the operation.
//! - [report] renders the matrix as a comma separated table.

pub mod book;
pub mod containers;
pub mod errors;
pub mod matrix;
pub mod measure;
pub mod operations;
pub mod report;
pub mod sample;
pub mod suite;
pub mod timer;

// RE-EXPORTS
// ================================================================================================

pub use book::{Book, format_book, parse_book};
pub use errors::{BenchError, BookParseError, ContainerError};
pub use matrix::TimeMatrix;
pub use measure::{Direction, bucket_for, measure, measure_with_preamble};
pub use operations::{Operation, Preamble};
pub use sample::SampleData;
pub use timer::Timer;

// CONSTANTS
// ================================================================================================

/// Number of operations accumulated into a single size bucket.
pub const DEFAULT_BLOCK_SIZE: usize = 250;

/// Search target used by the suite; no generated or loaded record carries this ISBN.
pub const ABSENT_ISBN: &str = "non-existent";
