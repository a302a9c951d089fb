//! Response assembly and transmission.
//!
//! Every response is a status line, a single `Content-type` line and a
//! blank line, followed by the body. No other headers are ever sent.

use std::fmt::Write as _;
use std::net::IpAddr;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::server::dispatch::Outcome;
use crate::server::file::Resource;

/// Content type of the generated error pages.
pub const HTML_CONTENT_TYPE: &str = "text/html";

const CRLF: &str = "\r\n";

/// The payload following the blank line.
#[derive(Debug)]
pub enum Body {
    /// File bytes, copied to the socket in chunks
    File(File),
    /// A generated HTML page
    Html(String),
    /// Nothing after the headers (HEAD of an existing file)
    Empty,
}

/// A complete response, ready to be written.
#[derive(Debug)]
pub struct ResponseEnvelope {
    /// The outcome the status line reports
    pub outcome: Outcome,
    /// Value of the `Content-type` line
    pub content_type: String,
    /// The entity body
    pub body: Body,
}

impl ResponseEnvelope {
    /// A `200 OK` for an opened file. With `send_body` false the headers
    /// stay the same but no file bytes follow.
    pub fn file(resource: Resource, send_body: bool) -> Self {
        let body = if send_body {
            Body::File(resource.file)
        } else {
            Body::Empty
        };

        Self {
            outcome: Outcome::Ok,
            content_type: resource.content_type,
            body,
        }
    }

    /// An error response carrying the generated HTML page.
    pub fn error(outcome: Outcome, client_ip: IpAddr, user_agent: &str) -> Self {
        Self {
            outcome,
            content_type: HTML_CONTENT_TYPE.to_string(),
            body: Body::Html(error_page(outcome, client_ip, user_agent)),
        }
    }

    /// `HTTP/1.0 <code> <reason>\r\n`
    pub fn status_line(&self) -> String {
        format!(
            "HTTP/1.0 {code} {reason}{CRLF}",
            code = self.outcome.code(),
            reason = self.outcome.reason_phrase()
        )
    }

    /// `Content-type: <mime>\r\n`
    pub fn content_type_line(&self) -> String {
        format!("Content-type: {}{CRLF}", self.content_type)
    }

    /// The status line, content-type line and terminating blank line.
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(self.status_line().as_bytes());
        bytes.extend_from_slice(self.content_type_line().as_bytes());
        bytes.extend_from_slice(CRLF.as_bytes());
        bytes
    }

    /// Write the whole response and flush it.
    ///
    /// Files are copied in chunks of `chunk_size` bytes until end of file.
    /// Returns the number of body bytes written.
    pub async fn write_to<W>(self, out: &mut W, chunk_size: usize) -> std::io::Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        out.write_all(&self.head_bytes()).await?;

        let written = match self.body {
            Body::File(mut file) => {
                let mut buf = vec![0; chunk_size.max(1)];
                let mut total = 0u64;
                loop {
                    let n = file.read(&mut buf).await?;
                    if n == 0 {
                        break;
                    }
                    out.write_all(&buf[..n]).await?;
                    total += n as u64;
                }
                total
            }
            Body::Html(page) => {
                out.write_all(page.as_bytes()).await?;
                page.len() as u64
            }
            Body::Empty => 0,
        };

        out.flush().await?;
        Ok(written)
    }
}

/// The HTML page sent with every non-OK outcome.
///
/// The user agent is inserted as element text with `&`, `<` and `>`
/// escaped; every other character appears as sent.
pub fn error_page(outcome: Outcome, client_ip: IpAddr, user_agent: &str) -> String {
    let reason = outcome.reason_phrase();
    let mut page = String::new();
    page.push_str("<HTML>\n<HEAD>\n");
    let _ = writeln!(page, "<TITLE>{reason}</TITLE>");
    page.push_str("</HEAD>\n<BODY>\n");
    let _ = writeln!(page, "<h3>{reason}</h3>");
    let _ = writeln!(page, "<p>Client-IP: {}</p>", client_ip.to_canonical());
    let _ = writeln!(page, "<p>User-Agent: {}</p>", escape_html(user_agent));
    page.push_str("</BODY>\n</HTML>");
    page
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
