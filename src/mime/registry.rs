//! The mime registry.

use std::collections::HashMap;
use std::path::Path;
use log::debug;

use crate::mime::error::Error;

/// Table location used when none is given on the command line.
pub const DEFAULT_MIME_PATH: &str = "mime.types";

/// Content type for extensions missing from the table.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Maps file extensions to content types.
#[derive(Debug, Clone, Default)]
pub struct MimeRegistry {
    types: HashMap<String, String>,
}

impl MimeRegistry {
    /// Build a registry from the text of a mime table.
    ///
    /// Each line reads `<mime-type> <ext1> <ext2> ...`. Empty lines and
    /// lines starting with `#` are skipped. A later line mapping an
    /// extension replaces the earlier mapping.
    pub fn parse(table: &str) -> Self {
        let mut types = HashMap::new();

        for line in table.lines() {
            let mut tokens = line.split_whitespace();
            let Some(mime) = tokens.next() else {
                continue;
            };
            if mime.starts_with('#') {
                continue;
            }
            for ext in tokens {
                types.insert(ext.to_string(), mime.to_string());
            }
        }

        Self { types }
    }

    /// Read and parse the table at `path`. Only a missing or unreadable
    /// file is an error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Non UTF-8 bytes (e.g. Latin-1 comments) are replaced, not rejected
        let registry = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(
            "Loaded {count} extensions from {path}",
            count = registry.len(),
            path = path.display()
        );
        Ok(registry)
    }

    /// The content type for `extension`, or `application/octet-stream`.
    pub fn lookup(&self, extension: &str) -> &str {
        self.types
            .get(extension)
            .map_or(DEFAULT_MIME_TYPE, String::as_str)
    }

    /// The content type for a file, keyed on the text after the last `.`
    /// of its file name. Names without a `.` get the default type.
    pub fn content_type_for(&self, path: &Path) -> &str {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map_or(DEFAULT_MIME_TYPE, |(_, ext)| self.lookup(ext))
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the table mapped no extensions at all.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
