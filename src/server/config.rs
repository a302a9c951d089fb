//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 6789;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of connections handled at once.
    pub max_connections: usize,
    /// Chunk size used when copying files to the socket.
    pub copy_buffer_size: usize,
    /// Directory request targets are resolved against.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            max_connections: 1024,
            copy_buffer_size: 1024,
            root: PathBuf::from("."),
        }
    }
}
