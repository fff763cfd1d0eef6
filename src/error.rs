//! Error types for the wordtally crate.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or scanning.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading from a word source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run of letters was longer than the configured limit.
    #[error("word of {length} letters on line {line} exceeds the limit of {limit}")]
    WordTooLong {
        length: usize,
        limit: usize,
        line: usize,
    },
}

/// A convenience `Result` type alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
