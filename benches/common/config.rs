//! Benchmark configuration constants shared by all benchmark modules.

use std::time::Duration;

// === Core Configuration ===
/// Default measurement time for most benchmarks
pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(10);

/// Sample size for statistical significance
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

// === Container Configuration ===
/// Record counts replayed against containers with constant or logarithmic operations
pub const CONTAINER_SIZES: &[usize] = &[
    100,    // Small sample
    1_000,  // Medium sample
    10_000, // Large sample
];

/// Record counts for operations that walk the whole container on every call
pub const LINEAR_SIZES: &[usize] = &[
    100,   // Small sample
    500,   // Medium sample
    2_000, // Large sample
];

// === Engine Configuration ===
/// Record counts used when comparing the engine against a bare loop
pub const ENGINE_SIZES: &[usize] = &[1_000, 10_000];

/// Record count used by the full suite benchmark
pub const SUITE_SIZE: usize = 1_000;

/// Block sizes used by the full suite benchmark
pub const BLOCK_SIZES: &[usize] = &[
    1,   // One bucket per record
    250, // Default bucket width
];
