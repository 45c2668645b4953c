//! Crate-level errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("hash table capacity must be at least 2, got {0}")]
    InvalidCapacity(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
