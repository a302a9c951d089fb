//! HTTP/1.0 request parser.
//!
//! Reads the request head off a connection and validates its first line.
//! Bodies are never read.

mod error;
mod method;
mod request;
mod tests;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::{HeaderView, RequestLine, MAX_LINE_LENGTH, UNKNOWN_USER_AGENT, VERSION_PREFIX};

// Re-export the head reader
pub use request::read_head;
