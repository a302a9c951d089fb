//! Mapping request targets onto files.
//!
//! Targets are joined onto the document root with the leading slash
//! removed. There is no canonicalisation and no containment: `..`
//! segments and symlinks are followed as the filesystem resolves them.

use std::path::{Path, PathBuf};
use log::debug;
use tokio::fs::File;

use crate::mime::MimeRegistry;

/// An opened file ready to be streamed.
#[derive(Debug)]
pub struct Resource {
    /// The open file handle
    pub file: File,
    /// Where the file was found
    pub path: PathBuf,
    /// Content type picked from the file extension
    pub content_type: String,
}

/// The filesystem path a request target refers to.
pub fn resolve_path(root: &Path, target: &str) -> PathBuf {
    let relative = target.strip_prefix('/').unwrap_or(target);
    root.join(relative)
}

/// Open the file behind `target`, or `None` when it cannot be served.
///
/// Missing files, unreadable files and directories all yield `None`.
pub async fn open_resource(root: &Path, target: &str, registry: &MimeRegistry) -> Option<Resource> {
    let path = resolve_path(root, target);

    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {path}: {e}", path = path.display());
            return None;
        }
    };

    match file.metadata().await {
        Ok(meta) if meta.is_dir() => {
            debug!("{path} is a directory", path = path.display());
            return None;
        }
        Ok(_) => {}
        Err(e) => {
            debug!("Cannot stat {path}: {e}", path = path.display());
            return None;
        }
    }

    let content_type = registry.content_type_for(&path).to_string();
    Some(Resource {
        file,
        path,
        content_type,
    })
}
