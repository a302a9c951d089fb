//! Error types for the HTTP request parser.

use thiserror::Error;

/// Errors that can occur while validating an HTTP/1.0 request head.
///
/// Every variant is answered with `400 Bad Request`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The peer sent bytes but no request line (e.g. a bare CRLF).
    #[error("Empty request")]
    EmptyRequest,

    /// The request line does not have two or three tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The third token of the request line is not an `HTTP/` version.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// The request target does not start with `/`.
    #[error("Invalid request target: {0}")]
    InvalidPath(String),

    /// The method token is not one this server recognises.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
}
