//! Error Types

use thiserror::Error;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("blank text rejected")]
    BlankText,

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
