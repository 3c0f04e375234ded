// Benchmark macros to reduce boilerplate code

// Creates a benchmark group replaying one operation over each of the given record counts
//
// The closure receives the criterion bencher and the record count, and is expected to use
// `iter_batched` so that building the input container is not timed.
//
// # Usage
// ```no_run
// benchmark_container_op!(vector_insert_at_back, "vector", "insert-at-back", CONTAINER_SIZES,
//     |b: &mut criterion::Bencher, size: usize| {
//         let books = generate_books_random(size);
//         b.iter_batched(Vector::new, |mut c| replay(&mut c, vector::InsertAtBack, &books), LargeInput)
//     });
// ```
#[macro_export]
macro_rules! benchmark_container_op {
    (
        $func_name:ident,
        $container:literal,
        $operation:literal,
        $sizes:expr,
        $closure:expr
    ) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group(concat!($container, "-", $operation));
            group.measurement_time($crate::common::config::DEFAULT_MEASUREMENT_TIME);
            group.sample_size($crate::common::config::DEFAULT_SAMPLE_SIZE);

            for size_ref in $sizes {
                let size_val = *size_ref;
                group.throughput(criterion::Throughput::Elements(size_val as u64));
                group.bench_with_input(
                    BenchmarkId::new($operation, size_val),
                    &size_val,
                    |b: &mut criterion::Bencher, &size_param: &usize| $closure(b, size_param),
                );
            }

            group.finish();
        }
    };
    (
        $func_name:ident,
        $container:literal,
        $operation:literal,
        $sizes:expr,
        $closure:expr,
    ) => {
        benchmark_container_op!($func_name, $container, $operation, $sizes, $closure);
    };
}
