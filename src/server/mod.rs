//! HTTP/1.0 static file server.
//!
//! One connection carries exactly one request. The handler reads the
//! request head, picks an [`Outcome`], writes a status line, a content-type
//! line, a blank line and the body, then closes the connection.

mod config;
mod connection;
mod dispatch;
mod error;
mod file;
mod http_server;
mod response;

// Re-export public items
pub use config::{ServerConfig, DEFAULT_PORT};
pub use connection::{handle_connection, ConnectionContext};
pub use dispatch::{dispatch, Dispatch, Outcome};
pub use error::Error;
pub use file::{open_resource, resolve_path, Resource};
pub use http_server::HttpServer;
pub use response::{error_page, Body, ResponseEnvelope, HTML_CONTENT_TYPE};
