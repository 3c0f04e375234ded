//! The result matrix: accumulated durations indexed by size bucket, container and operation.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Accumulated durations per operation name.
pub type OperationTimes = BTreeMap<String, Duration>;

/// Accumulated durations per container name, then operation name.
pub type BucketTimes = BTreeMap<String, OperationTimes>;

// TIME MATRIX
// ================================================================================================

/// A three level ordered mapping `bucket -> container -> operation -> accumulated duration`.
///
/// Every entry is the sum of all individual timings whose running index fell into the bucket.
/// Entries are created on first use; a (container, operation) pair that never recorded anything in
/// a bucket is absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeMatrix {
    buckets: BTreeMap<usize, BucketTimes>,
}

impl TimeMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Adds `elapsed` to the entry for (`bucket`, `container`, `operation`).
    pub fn record(&mut self, bucket: usize, container: &str, operation: &str, elapsed: Duration) {
        *self
            .buckets
            .entry(bucket)
            .or_default()
            .entry(container.to_owned())
            .or_default()
            .entry(operation.to_owned())
            .or_default() += elapsed;
    }

    /// Returns the accumulated duration for the given entry, if anything was recorded there.
    pub fn get(&self, bucket: usize, container: &str, operation: &str) -> Option<Duration> {
        self.buckets.get(&bucket)?.get(container)?.get(operation).copied()
    }

    /// Returns the bucket keys in ascending order.
    pub fn buckets(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// Returns the buckets in ascending order together with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BucketTimes)> + '_ {
        self.buckets.iter().map(|(bucket, times)| (*bucket, times))
    }

    /// Returns every (container, operation) pair present in any bucket, in sorted order.
    pub fn columns(&self) -> BTreeSet<(&str, &str)> {
        self.buckets
            .values()
            .flat_map(|containers| {
                containers.iter().flat_map(|(container, operations)| {
                    operations.keys().map(move |operation| (container.as_str(), operation.as_str()))
                })
            })
            .collect()
    }
}

// TESTS
// ================================================================================================
