//! Errors from the file collaborators around the rewrite engine.

use std::io;
use std::path::PathBuf;

/// Failures from reading the input or writing the output.
///
/// Tokenizing and rewriting cannot fail, so these are the only error kinds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error reading input file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
