use thiserror::Error;

/// Main error type for the dynlist library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An invalid argument was provided
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An index fell outside the valid range of the list
    #[error("Index {index} out of range for list of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// An iterator was advanced past its end
    #[error("Iterator advanced past the end of the list")]
    IteratorExhausted,
}

/// A specialized `Result` type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
