//! Extension to content-type lookup.
//!
//! The registry is loaded once from a `mime.types` style table before the
//! server starts and is only read afterwards.

mod error;
mod registry;
mod tests;

// Re-export public items
pub use error::Error;
pub use registry::{MimeRegistry, DEFAULT_MIME_PATH, DEFAULT_MIME_TYPE};
