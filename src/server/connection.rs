//! Handling of a single connection: one request, one response, close.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use log::{debug, info};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::mime::MimeRegistry;
use crate::parser::{read_head, HeaderView};
use crate::server::dispatch::{dispatch, Dispatch, Outcome};
use crate::server::error::Error;
use crate::server::file::open_resource;
use crate::server::response::ResponseEnvelope;

/// Everything a connection handler needs besides its socket.
///
/// Shared read-only between all connections.
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    /// The extension lookup table
    pub registry: Arc<MimeRegistry>,
    /// Directory targets are resolved against
    pub root: PathBuf,
    /// Chunk size for file copies
    pub copy_buffer_size: usize,
}

/// Serve exactly one request on `stream`.
///
/// Reads the request head, decides the outcome, writes the response and
/// shuts the write side down. Anything the peer sends after the head is
/// never read. A peer that closes before sending anything gets no
/// response. A header line longer than [`MAX_LINE_LENGTH`] is answered
/// with `400 Bad Request`. I/O failures are returned to the caller for
/// logging.
///
/// [`MAX_LINE_LENGTH`]: crate::parser::MAX_LINE_LENGTH
pub async fn handle_connection<S>(
    stream: &mut S,
    peer: SocketAddr,
    ctx: &ConnectionContext,
) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let head = {
        let mut reader = BufReader::new(&mut *stream);
        match read_head(&mut reader).await {
            Ok(head) => head,
            // Oversized lines are a malformed request, answered with 400
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!("{peer} sent an unreadable request head: {e}");
                Some(HeaderView::default())
            }
            Err(e) => return Err(e.into()),
        }
    };

    let Some(head) = head else {
        debug!("{peer} closed the connection without sending a request");
        return Ok(());
    };

    for line in head.lines() {
        debug!("{peer} > {line}");
    }

    let user_agent = head.user_agent();
    let envelope = match dispatch(&head) {
        Dispatch::Serve { target, send_body } => {
            match open_resource(&ctx.root, &target, &ctx.registry).await {
                Some(resource) => ResponseEnvelope::file(resource, send_body),
                None => ResponseEnvelope::error(Outcome::NotFound, peer.ip(), user_agent),
            }
        }
        Dispatch::Respond(outcome) => ResponseEnvelope::error(outcome, peer.ip(), user_agent),
    };

    let request_line = head.lines().first().map_or("", String::as_str);
    let code = envelope.outcome.code();
    debug!("{peer} < {}", envelope.status_line().trim_end());

    let written = envelope.write_to(stream, ctx.copy_buffer_size).await?;
    stream.shutdown().await?;

    info!("{peer} \"{request_line}\" {code} {written}");
    Ok(())
}
