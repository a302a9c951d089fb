//! Request head reading and request-line validation.

use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::parser::error::Error;
use crate::parser::method::Method;

/// Prefix every version token must carry.
pub const VERSION_PREFIX: &str = "HTTP/";

/// User agent reported when the request carries no `User-Agent` header.
pub const UNKNOWN_USER_AGENT: &str = "unknown";

/// Longest header line accepted, not counting its line terminator.
pub const MAX_LINE_LENGTH: usize = 8192;

const USER_AGENT_PREFIX: &str = "user-agent:";

/// The validated first line of a request.
///
/// `target` always starts with `/` and `version`, when present, always
/// starts with `HTTP/`. The method is kept as the raw token so unknown
/// methods can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token, exactly as sent
    pub method: String,
    /// The request target, including the leading slash
    pub target: String,
    /// The version token, absent for HTTP/0.9 style two-token lines
    pub version: Option<String>,
}

impl RequestLine {
    /// Validate an already tokenized request line.
    ///
    /// The checks run in a fixed order: token count, version prefix, then
    /// target prefix.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, Error> {
        let (method, target, version) = match tokens {
            [method, target] => (*method, *target, None),
            [method, target, version] => (*method, *target, Some(*version)),
            _ => return Err(Error::MalformedRequestLine(tokens.join(" "))),
        };

        if let Some(version) = version {
            if !version.starts_with(VERSION_PREFIX) {
                return Err(Error::InvalidVersion(version.to_string()));
            }
        }

        if !target.starts_with('/') {
            return Err(Error::InvalidPath(target.to_string()));
        }

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            version: version.map(str::to_string),
        })
    }

    /// The method as a known [`Method`], or [`Error::InvalidMethod`].
    pub fn method(&self) -> Result<Method, Error> {
        Method::from_str(&self.method)
    }
}

impl FromStr for RequestLine {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::from_tokens(&tokens)
    }
}

/// The raw header lines of one request, in wire order.
///
/// The first entry is the request line. Lines are stored without their
/// line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderView {
    lines: Vec<String>,
}

impl HeaderView {
    /// Create a view over already-split header lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The raw lines, request line first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Each line split on whitespace.
    pub fn tokens(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.lines.iter().map(|line| line.split_whitespace().collect())
    }

    /// Validate the first line as a request line.
    pub fn request_line(&self) -> Result<RequestLine, Error> {
        match self.tokens().next() {
            Some(tokens) => RequestLine::from_tokens(&tokens),
            None => Err(Error::EmptyRequest),
        }
    }

    /// The value of the last `User-Agent:` line (prefix matched
    /// case-insensitively), or `"unknown"`.
    pub fn user_agent(&self) -> &str {
        self.lines
            .iter()
            .rev()
            .find_map(|line| {
                let prefix = line.get(..USER_AGENT_PREFIX.len())?;
                if prefix.eq_ignore_ascii_case(USER_AGENT_PREFIX) {
                    Some(line[USER_AGENT_PREFIX.len()..].trim())
                } else {
                    None
                }
            })
            .unwrap_or(UNKNOWN_USER_AGENT)
    }
}

/// Read header lines until a blank line or end of stream.
///
/// Lines end at LF; a CR right before it is dropped. Non UTF-8 bytes are
/// replaced rather than rejected. Returns `Ok(None)` when the peer closed
/// the stream without sending a single byte, and an
/// [`std::io::ErrorKind::InvalidData`] error for a line longer than
/// [`MAX_LINE_LENGTH`]; at most `MAX_LINE_LENGTH + 2` bytes are buffered
/// per line.
pub async fn read_head<R>(reader: &mut R) -> std::io::Result<Option<HeaderView>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    let mut received = false;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = (&mut *reader)
            .take(MAX_LINE_LENGTH as u64 + 2)
            .read_until(b'\n', &mut buf)
            .await?;
        if n == 0 {
            break;
        }
        received = true;

        let line = strip_line_ending(&buf);
        if line.len() > MAX_LINE_LENGTH {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("header line longer than {MAX_LINE_LENGTH} bytes"),
            ));
        }
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }
        lines.push(String::from_utf8_lossy(line).into_owned());
    }

    if !received {
        return Ok(None);
    }

    Ok(Some(HeaderView::new(lines)))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
