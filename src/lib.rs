//! A minimal HTTP/1.0 static file server.
//!
//! Each TCP connection carries one request. The server reads the request
//! head, resolves the target against a document root and answers with a
//! status line, a content-type line and either the file bytes or a small
//! HTML error page, then closes the connection.
//!
//! # Features
//!
//! - `GET` and `HEAD` of files below the document root
//! - Content types from a `mime.types` style table
//! - `400`, `404`, `405` and `501` answers with a generated HTML page
//! - One task per connection, bounded by a configurable limit
//!
//! # Examples
//!
//! ## Validating a request line
//!
//! ```
//! use microhttpd_rs::{ParserError, RequestLine};
//!
//! let line: RequestLine = "GET /index.html HTTP/1.0".parse().unwrap();
//! assert_eq!(line.target, "/index.html");
//!
//! match "GET index.html".parse::<RequestLine>() {
//!     Err(ParserError::InvalidPath(target)) => println!("Bad target: {}", target),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Looking up content types
//!
//! ```
//! use microhttpd_rs::MimeRegistry;
//!
//! let registry = MimeRegistry::parse("text/html html htm\n# image/gif gif\n");
//! assert_eq!(registry.lookup("htm"), "text/html");
//! assert_eq!(registry.lookup("gif"), "application/octet-stream");
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use microhttpd_rs::{HttpServer, MimeRegistry, ServerConfig};
//!
//! # async fn run() -> Result<(), microhttpd_rs::ServerError> {
//! let registry = MimeRegistry::load("mime.types").await?;
//! let server = HttpServer::new(ServerConfig::default(), registry);
//! server.start().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mime;
pub mod parser;
pub mod server;

// Re-export commonly used items for convenience
pub use mime::{Error as MimeError, MimeRegistry};
pub use parser::{Error as ParserError, HeaderView, Method, RequestLine, read_head};
pub use server::{Error as ServerError, HttpServer, Outcome, ResponseEnvelope, ServerConfig};
