//! Error types for the HTTP server.

use std::net::SocketAddr;
use thiserror::Error;

use crate::mime::Error as MimeError;

/// Errors that can occur during HTTP server operation.
///
/// Request-level problems never show up here; they are answered with a
/// status code instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be bound.
    #[error("Could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on a connection.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The mime table could not be loaded.
    #[error(transparent)]
    MimeTable(#[from] MimeError),
}
