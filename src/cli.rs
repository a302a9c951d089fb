//! Command line handling for the `microhttpd` binary.
//!
//! The only accepted forms are no arguments at all or `-mime <path>`.

use std::path::PathBuf;
use thiserror::Error;

use crate::mime::DEFAULT_MIME_PATH;

/// Usage text printed next to argument errors.
pub const USAGE: &str = "usage: microhttpd [-mime <path>]";

/// Errors from argument parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Anything other than no arguments or `-mime <path>`.
    #[error("Invalid arguments: {0:?}")]
    InvalidArguments(Vec<String>),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Location of the mime table
    pub mime_path: PathBuf,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            mime_path: PathBuf::from(DEFAULT_MIME_PATH),
        }
    }
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, Error>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();

    match args.as_slice() {
        [] => Ok(CliArgs::default()),
        [flag, path] if flag == "-mime" => Ok(CliArgs {
            mime_path: PathBuf::from(path),
        }),
        _ => Err(Error::InvalidArguments(args)),
    }
}
