//! The measurement engine.
//!
//! [measure_with_preamble] replays every element of a sample against one container operation,
//! timing each application in isolation and accumulating the timings into a [TimeMatrix] bucket
//! chosen by the size of the container at the time of the operation.

use std::{hint, time::Instant};

use crate::{
    Book,
    errors::ContainerError,
    matrix::TimeMatrix,
    operations::{NoPreamble, Operation, Preamble},
    timer::Timer,
};


// DIRECTION
// ================================================================================================

/// Whether the measured container grows (insertions) or shrinks (removals) over a run.
///
/// The direction only affects which bucket each timing lands in, never the operation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Direction {
    #[default]
    Grow = 1,
    Shrink = -1,
}

impl Direction {
    /// Returns the signed step applied to the running size after each operation.
    pub const fn step(self) -> isize {
        self as isize
    }

    /// Returns the container size the running index starts from for a sample of `count`
    /// elements.
    pub const fn initial_size(self, count: usize) -> usize {
        match self {
            Direction::Grow => 0,
            Direction::Shrink => count,
        }
    }

    /// Returns the zero-based slot touched by an operation on a container of `size` elements:
    /// growth fills slot `size`, shrinking empties slot `size - 1`.
    const fn slot(self, size: usize) -> usize {
        match self {
            Direction::Grow => size,
            Direction::Shrink => size.saturating_sub(1),
        }
    }

    const fn advance(self, size: usize) -> usize {
        match self {
            Direction::Grow => size + 1,
            Direction::Shrink => size.saturating_sub(1),
        }
    }
}

/// Returns the bucket holding timings for zero-based slot `index`: the smallest multiple of
/// `block_size` strictly greater than `index`.
///
/// # Panics
/// Panics if `block_size` is zero.
pub const fn bucket_for(index: usize, block_size: usize) -> usize {
    (index / block_size + 1) * block_size
}

// MEASUREMENT
// ================================================================================================

/// Measures `operation` against `container` once per sample element, without setup work.
///
/// See [measure_with_preamble].
#[allow(clippy::too_many_arguments)]
pub fn measure<C, O>(
    container_name: &str,
    operation_name: &str,
    container: &mut C,
    operation: O,
    direction: Direction,
    sample: &[Book],
    matrix: &mut TimeMatrix,
    block_size: usize,
) -> Result<(), ContainerError>
where
    O: Operation<C>,
{
    measure_with_preamble(
        container_name,
        operation_name,
        container,
        NoPreamble,
        operation,
        direction,
        sample,
        matrix,
        block_size,
    )
}

/// Measures `operation` against `container` once per sample element.
///
/// For every element, in sample order:
/// 1. `preamble` runs untimed, e.g. to populate the container a search will scan;
/// 2. `operation` runs between two monotonic clock readings;
/// 3. the elapsed time is added to `matrix[bucket][container_name][operation_name]`, where the
///    bucket is `bucket_for(slot, block_size)` for the slot the operation touches.
///
/// The running size starts at 0 when growing and at the sample size when shrinking. An insertion
/// fills slot `size`; a removal empties slot `size - 1`, not slot `size`. Both directions over the
/// same sample therefore land in the same buckets: 500 removals with a block size of 250 fill
/// buckets 250 and 500, never 750.
///
/// An empty sample records nothing at all. The engine keeps no state of its own.
///
/// # Errors
/// Returns the first error raised by `operation`, abandoning the rest of the run. Timings recorded
/// before the failure remain in `matrix`.
///
/// # Panics
/// Panics if `block_size` is zero.
#[allow(clippy::too_many_arguments)]
pub fn measure_with_preamble<C, P, O>(
    container_name: &str,
    operation_name: &str,
    container: &mut C,
    mut preamble: P,
    mut operation: O,
    direction: Direction,
    sample: &[Book],
    matrix: &mut TimeMatrix,
    block_size: usize,
) -> Result<(), ContainerError>
where
    P: Preamble<C>,
    O: Operation<C>,
{
    assert!(block_size > 0, "block size must be greater than zero");

    tracing::info!("starting {container_name}'s {operation_name} operation");
    let timer = Timer::with_message(format!("finished {container_name}'s {operation_name} in "));

    let mut size = direction.initial_size(sample.len());
    for book in sample {
        preamble.prepare(container, book);

        let start = Instant::now();
        let outcome = hint::black_box(operation.apply(container, book));
        let stop = Instant::now();
        outcome?;

        let bucket = bucket_for(direction.slot(size), block_size);
        matrix.record(bucket, container_name, operation_name, stop - start);
        size = direction.advance(size);
    }

    timer.finish();
    Ok(())
}
