//! Shared configuration and helpers for the criterion benchmarks.
//!
//! # Organization
//!
//! Every benchmark module follows the same layout:
//! 1. Input generation through [data]
//! 2. Benchmark functions declared with the [macros] helpers
//! 3. Group definition and main export
//!
//! # Naming Conventions
//!
//! - `<container>_<operation>` for functor benchmarks (e.g. `vector_insert_at_back`)
//! - `measure_<subject>` for engine benchmarks (e.g. `measure_overhead`)
//! - `generate_<data>_<pattern>` for input generators (e.g. `generate_books_random`)

#![allow(dead_code)] // benchmark use doesn't count as "usage" for linting

pub mod config;
pub mod data;
pub mod macros;
