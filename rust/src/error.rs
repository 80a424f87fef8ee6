//! Error types for definition lookup.

use std::path::PathBuf;

/// Errors produced while extracting a definition from a file or a tree.
///
/// `Parse` and `NotFound` are per-file outcomes that the tree search
/// recovers from; `Io` always aborts the search.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("parse failed: {message}")]
    Parse { message: String },

    #[error("definition {name} not found")]
    NotFound { name: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
