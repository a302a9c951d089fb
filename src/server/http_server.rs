//! The listener: accepts connections and runs one handler per connection.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;

use crate::mime::MimeRegistry;
use crate::server::config::ServerConfig;
use crate::server::connection::{handle_connection, ConnectionContext};
use crate::server::error::Error;

/// A static file HTTP/1.0 server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    registry: Arc<MimeRegistry>,
}

impl HttpServer {
    /// Create a server that answers with types from `registry`.
    pub fn new(config: ServerConfig, registry: MimeRegistry) -> Self {
        Self {
            config,
            registry: Arc::new(registry),
        }
    }

    /// The extension table handed to every connection.
    pub fn registry(&self) -> &MimeRegistry {
        &self.registry
    }

    /// Bind the configured address. A port already in use is an error;
    /// no other port is tried.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;

        let local = listener.local_addr().unwrap_or(addr);
        info!("Server listening on http://{local}");
        Ok(listener)
    }

    /// Bind, then serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await;
        Ok(())
    }

    /// Accept connections on `listener` until `shutdown` completes.
    ///
    /// Each connection gets its own task. At most `max_connections` tasks
    /// run at once; beyond that the loop waits for a slot before taking
    /// the next connection, and a shutdown during that wait drops the
    /// pending connection. Accept errors are logged and never end the
    /// loop.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections.max(1)));
        let ctx = ConnectionContext {
            registry: self.registry.clone(),
            root: self.config.root.clone(),
            copy_buffer_size: self.config.copy_buffer_size,
        };

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("Shutting down server...");
                    break;
                }

                // Reap finished connections so the set does not grow
                Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = res {
                        error!("Connection task failed: {e}");
                    }
                }

                accept_result = listener.accept() => {
                    let (socket, addr) = match accept_result {
                        Ok(accepted) => accepted,
                        Err(e) => {
                            Self::handle_accept_error(e).await;
                            continue;
                        }
                    };

                    if semaphore.available_permits() == 0 {
                        warn!("Connection limit reached, {addr} waits for a free slot");
                    }
                    // Waiting for a slot must not block shutdown
                    let permit = tokio::select! {
                        () = &mut shutdown => {
                            info!("Shutting down server, dropping pending connection from {addr}");
                            break;
                        }
                        permit = semaphore.clone().acquire_owned() => permit,
                    };
                    let Ok(permit) = permit else {
                        // The semaphore is never closed
                        break;
                    };

                    Self::spawn_connection(socket, addr, permit, ctx.clone(), &mut tasks);
                }
            }
        }

        Self::perform_shutdown(&mut tasks).await;
    }

    /// Hand a connection that holds a slot to its own task.
    fn spawn_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        permit: OwnedSemaphorePermit,
        ctx: ConnectionContext,
        tasks: &mut JoinSet<()>,
    ) {
        debug!("Accepted connection from {addr}");
        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = handle_connection(&mut socket, addr, &ctx).await {
                warn!("Connection with {addr} abandoned: {e}");
            }
        });
    }

    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Back off briefly so resource exhaustion does not spin the loop
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Wait for in-flight connections, giving up after 30 seconds.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!("Abandoning {len} connections still open", len = tasks.len());
            tasks.abort_all();
        }
        info!("Server shutdown complete");
    }
}

/// Completes on Ctrl+C. If the handler cannot be installed it never
/// completes.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            error!("Error setting up Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
