//! Request outcomes and method dispatch.

use log::debug;

use crate::parser::{HeaderView, Method};

/// The outcome of one request, bound to its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotImplemented = 501,
}

impl Outcome {
    /// The numeric status code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Get the reason phrase for this outcome.
    pub fn reason_phrase(self) -> &'static str {
        match self {
            Outcome::Ok => "OK",
            Outcome::BadRequest => "Bad Request",
            Outcome::NotFound => "Not Found",
            Outcome::MethodNotAllowed => "Method Not Allowed",
            Outcome::NotImplemented => "Not Implemented",
        }
    }
}

/// What the connection should do next with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Resolve `target` on disk. `send_body` is false for HEAD.
    Serve { target: String, send_body: bool },
    /// Answer with a fixed outcome without touching the filesystem.
    Respond(Outcome),
}

/// Decide how to answer a request head.
///
/// | Method        | Result                  |
/// |---------------|-------------------------|
/// | GET           | serve with body         |
/// | HEAD          | serve without body      |
/// | POST          | 501 Not Implemented     |
/// | PUT, DELETE   | 405 Method Not Allowed  |
/// | other/invalid | 400 Bad Request         |
pub fn dispatch(head: &HeaderView) -> Dispatch {
    let line = match head.request_line() {
        Ok(line) => line,
        Err(e) => {
            debug!("Rejecting request: {e}");
            return Dispatch::Respond(Outcome::BadRequest);
        }
    };

    match line.method() {
        Ok(Method::GET) => Dispatch::Serve {
            target: line.target,
            send_body: true,
        },
        Ok(Method::HEAD) => Dispatch::Serve {
            target: line.target,
            send_body: false,
        },
        Ok(Method::POST) => Dispatch::Respond(Outcome::NotImplemented),
        Ok(Method::PUT | Method::DELETE) => Dispatch::Respond(Outcome::MethodNotAllowed),
        Err(e) => {
            debug!("Rejecting request: {e}");
            Dispatch::Respond(Outcome::BadRequest)
        }
    }
}
