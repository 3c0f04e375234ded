use thiserror::Error;

/// Errors raised by the container operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("cannot remove from empty {container}")]
    Empty { container: &'static str },
}

/// Errors produced while decoding a [crate::Book] from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookParseError {
    #[error("expected an opening quote for the {field} field")]
    MissingOpeningQuote { field: &'static str },
    #[error("the {field} field is missing its closing quote")]
    UnterminatedField { field: &'static str },
    #[error("expected ',' after the {field} field")]
    MissingDelimiter { field: &'static str },
    #[error("price `{0}` is not a valid decimal number")]
    InvalidPrice(String),
    #[error("line ended before the {field} field")]
    UnexpectedEndOfLine { field: &'static str },
}

/// Top-level errors surfaced by the benchmark suite.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("block size must be greater than zero")]
    InvalidBlockSize,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Container(#[from] ContainerError),
}
