//! Error types for loading the mime table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a mime table.
#[derive(Debug, Error)]
pub enum Error {
    /// The table file is missing or unreadable.
    #[error("Mime table {path} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
