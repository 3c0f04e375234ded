//! The full benchmark scenario: every operation of every selected container, measured over the
//! same sample.

use crate::{
    ABSENT_ISBN, Book, DEFAULT_BLOCK_SIZE,
    containers::{Bst, Dll, HashTable, Sll, Vector},
    errors::{BenchError, ContainerError},
    matrix::TimeMatrix,
    measure::{Direction, measure_with_preamble},
    operations::{NoPreamble, Operation, Preamble, bst, dll, hash_table, sll, vector},
    sample::SampleData,
    timer::Timer,
};

// OPERATION NAMES
// ================================================================================================

pub const INSERT_AT_BACK: &str = "Insert at the back";
pub const INSERT_AT_FRONT: &str = "Insert at the front";
pub const REMOVE_FROM_BACK: &str = "Remove from the back";
pub const REMOVE_FROM_FRONT: &str = "Remove from the front";
pub const INSERT: &str = "Insert";
pub const REMOVE: &str = "Remove";
pub const SEARCH: &str = "Search";

// CONTAINER KIND
// ================================================================================================

/// The containers the suite knows how to measure, in the order they are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "executable", derive(clap::ValueEnum))]
pub enum ContainerKind {
    Vector,
    Dll,
    Sll,
    Bst,
    HashTable,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 5] = [
        ContainerKind::Vector,
        ContainerKind::Dll,
        ContainerKind::Sll,
        ContainerKind::Bst,
        ContainerKind::HashTable,
    ];

    /// Returns the name used for this container in the report columns.
    pub const fn name(self) -> &'static str {
        match self {
            ContainerKind::Vector => "Vector",
            ContainerKind::Dll => "DLL",
            ContainerKind::Sll => "SLL",
            ContainerKind::Bst => "BST",
            ContainerKind::HashTable => "Hash Table",
        }
    }

    /// Returns the long form of the name used in progress diagnostics.
    pub const fn description(self) -> &'static str {
        match self {
            ContainerKind::Vector => "Vector",
            ContainerKind::Dll => "Doubly Linked List",
            ContainerKind::Sll => "Singly Linked List",
            ContainerKind::Bst => "Binary Search Tree",
            ContainerKind::HashTable => "Hash Table",
        }
    }

    /// Returns the names of the operations measured for this container.
    pub const fn operations(self) -> &'static [&'static str] {
        match self {
            ContainerKind::Vector | ContainerKind::Dll | ContainerKind::Sll => &[
                INSERT_AT_BACK,
                INSERT_AT_FRONT,
                REMOVE_FROM_BACK,
                REMOVE_FROM_FRONT,
                SEARCH,
            ],
            ContainerKind::Bst | ContainerKind::HashTable => &[INSERT, REMOVE, SEARCH],
        }
    }
}

// SUITE CONFIG
// ================================================================================================

/// Resolved settings for a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    block_size: usize,
    containers: Vec<ContainerKind>,
}

impl SuiteConfig {
    /// Returns a config measuring every container with the given bucket width.
    ///
    /// # Errors
    /// Returns [BenchError::InvalidBlockSize] if `block_size` is zero.
    pub fn new(block_size: usize) -> Result<Self, BenchError> {
        if block_size == 0 {
            return Err(BenchError::InvalidBlockSize);
        }
        Ok(Self { block_size, containers: ContainerKind::ALL.to_vec() })
    }

    /// Restricts the run to `containers`. An empty selection keeps every container; duplicates
    /// are ignored and the run order is always [ContainerKind::ALL] order.
    pub fn with_containers(mut self, containers: impl IntoIterator<Item = ContainerKind>) -> Self {
        let mut selected: Vec<_> = containers.into_iter().collect();
        if !selected.is_empty() {
            selected.sort_unstable();
            selected.dedup();
            self.containers = selected;
        }
        self
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn containers(&self) -> &[ContainerKind] {
        &self.containers
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            containers: ContainerKind::ALL.to_vec(),
        }
    }
}

// SUITE
// ================================================================================================

/// Runs every configured container's operations over `sample` and returns the filled matrix.
///
/// Containers used by removals start out holding the whole sample; searches look for an ISBN no
/// record carries, after an untimed preamble inserts the current element.
///
/// # Errors
/// Returns the first [ContainerError] raised by an operation; the partial matrix is discarded.
pub fn run_suite(config: &SuiteConfig, sample: &SampleData) -> Result<TimeMatrix, ContainerError> {
    let mut matrix = TimeMatrix::new();

    for &kind in config.containers() {
        tracing::info!("starting to collect {} measurements", kind.description());
        let timer = Timer::with_message(format!("{} measurements completed in ", kind.description()));

        let mut runner = Runner {
            name: kind.name(),
            sample,
            matrix: &mut matrix,
            block_size: config.block_size(),
        };
        match kind {
            ContainerKind::Vector => runner.vector()?,
            ContainerKind::Dll => runner.dll()?,
            ContainerKind::Sll => runner.sll()?,
            ContainerKind::Bst => runner.bst()?,
            ContainerKind::HashTable => runner.hash_table()?,
        }

        timer.finish();
    }

    Ok(matrix)
}

struct Runner<'a> {
    name: &'static str,
    sample: &'a [Book],
    matrix: &'a mut TimeMatrix,
    block_size: usize,
}

impl Runner<'_> {
    fn vector(&mut self) -> Result<(), ContainerError> {
        self.grow(INSERT_AT_BACK, Vector::new(), vector::InsertAtBack)?;
        self.grow(INSERT_AT_FRONT, Vector::new(), vector::InsertAtFront)?;
        self.shrink(REMOVE_FROM_BACK, self.sample.to_vec(), vector::RemoveFromBack)?;
        self.shrink(REMOVE_FROM_FRONT, self.sample.to_vec(), vector::RemoveFromFront)?;
        self.search(
            Vector::with_capacity(self.sample.len()),
            |container: &mut Vector, book: &Book| container.push(book.clone()),
            vector::Search::new(ABSENT_ISBN),
        )
    }

    fn dll(&mut self) -> Result<(), ContainerError> {
        let sample = self.sample;
        let filled = || sample.iter().cloned().collect::<Dll>();

        self.grow(INSERT_AT_BACK, Dll::new(), dll::InsertAtBack)?;
        self.grow(INSERT_AT_FRONT, Dll::new(), dll::InsertAtFront)?;
        self.shrink(REMOVE_FROM_BACK, filled(), dll::RemoveFromBack)?;
        self.shrink(REMOVE_FROM_FRONT, filled(), dll::RemoveFromFront)?;
        self.search(
            Dll::new(),
            |container: &mut Dll, book: &Book| container.push_back(book.clone()),
            dll::Search::new(ABSENT_ISBN),
        )
    }

    fn sll(&mut self) -> Result<(), ContainerError> {
        let sample = self.sample;
        let filled = || sample.iter().cloned().collect::<Sll>();

        self.grow(INSERT_AT_BACK, Sll::new(), sll::InsertAtBack)?;
        self.grow(INSERT_AT_FRONT, Sll::new(), sll::InsertAtFront)?;
        self.shrink(REMOVE_FROM_BACK, filled(), sll::RemoveFromBack)?;
        self.shrink(REMOVE_FROM_FRONT, filled(), sll::RemoveFromFront)?;
        self.search(
            Sll::new(),
            |container: &mut Sll, book: &Book| container.push_front(book.clone()),
            sll::Search::new(ABSENT_ISBN),
        )
    }

    fn bst(&mut self) -> Result<(), ContainerError> {
        let filled: Bst =
            self.sample.iter().map(|book| (book.isbn().to_owned(), book.clone())).collect();

        self.grow(INSERT, Bst::new(), bst::Insert)?;
        self.shrink(REMOVE, filled, bst::Remove)?;
        self.search(
            Bst::new(),
            |container: &mut Bst, book: &Book| {
                container.entry(book.isbn().to_owned()).or_insert_with(|| book.clone());
            },
            bst::Search::new(ABSENT_ISBN),
        )
    }

    fn hash_table(&mut self) -> Result<(), ContainerError> {
        let filled: HashTable =
            self.sample.iter().map(|book| (book.isbn().to_owned(), book.clone())).collect();

        self.grow(INSERT, HashTable::new(), hash_table::Insert)?;
        self.shrink(REMOVE, filled, hash_table::Remove)?;
        self.search(
            HashTable::new(),
            |container: &mut HashTable, book: &Book| {
                container.entry(book.isbn().to_owned()).or_insert_with(|| book.clone());
            },
            hash_table::Search::new(ABSENT_ISBN),
        )
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    fn grow<C, O>(&mut self, operation: &str, mut container: C, op: O) -> Result<(), ContainerError>
    where
        O: Operation<C>,
    {
        self.measure(operation, &mut container, NoPreamble, op, Direction::Grow)
    }

    fn shrink<C, O>(&mut self, operation: &str, mut container: C, op: O) -> Result<(), ContainerError>
    where
        O: Operation<C>,
    {
        self.measure(operation, &mut container, NoPreamble, op, Direction::Shrink)
    }

    fn search<C, P, O>(&mut self, mut container: C, preamble: P, op: O) -> Result<(), ContainerError>
    where
        P: Preamble<C>,
        O: Operation<C>,
    {
        self.measure(SEARCH, &mut container, preamble, op, Direction::Grow)
    }

    fn measure<C, P, O>(
        &mut self,
        operation: &str,
        container: &mut C,
        preamble: P,
        op: O,
        direction: Direction,
    ) -> Result<(), ContainerError>
    where
        P: Preamble<C>,
        O: Operation<C>,
    {
        measure_with_preamble(
            self.name,
            operation,
            container,
            preamble,
            op,
            direction,
            self.sample,
            self.matrix,
            self.block_size,
        )
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn zero_block_size_is_rejected() {
        assert_matches!(SuiteConfig::new(0), Err(BenchError::InvalidBlockSize));
        assert_eq!(SuiteConfig::new(250).unwrap(), SuiteConfig::default());
    }

    #[test]
    fn container_selection_is_ordered_and_deduplicated() {
        let config = SuiteConfig::default().with_containers([
            ContainerKind::HashTable,
            ContainerKind::Vector,
            ContainerKind::HashTable,
        ]);
        assert_eq!(config.containers(), [ContainerKind::Vector, ContainerKind::HashTable]);

        let config = SuiteConfig::default().with_containers([]);
        assert_eq!(config.containers(), ContainerKind::ALL);
    }

    #[test]
    fn empty_sample_yields_empty_matrix() {
        let matrix = run_suite(&SuiteConfig::default(), &SampleData::new([])).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn single_container_run_reports_its_operations() {
        let books = (0..10).map(|i| Book::new("t", "a", format!("isbn-{i}"), 1.0));
        let sample = SampleData::new(books);
        let config = SuiteConfig::new(4).unwrap().with_containers([ContainerKind::Bst]);

        let matrix = run_suite(&config, &sample).unwrap();

        assert_eq!(matrix.buckets().collect::<Vec<_>>(), [4, 8, 12]);
        let columns: Vec<_> = matrix.columns().into_iter().collect();
        assert_eq!(columns, [("BST", INSERT), ("BST", REMOVE), ("BST", SEARCH)]);
    }
}
