//! Tests for the mime registry.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use crate::mime::{Error, MimeRegistry, DEFAULT_MIME_TYPE};

    const TABLE: &str = "\
# comment line
text/html\thtml htm


image/png png
text/plain txt text
application/x-custom txt
#image/gif gif
";

    #[test]
    fn test_lookup_known_extensions() {
        let registry = MimeRegistry::parse(TABLE);
        assert_eq!(registry.lookup("html"), "text/html");
        assert_eq!(registry.lookup("htm"), "text/html");
        assert_eq!(registry.lookup("png"), "image/png");
        assert_eq!(registry.lookup("text"), "text/plain");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let registry = MimeRegistry::parse(TABLE);
        assert_eq!(registry.lookup("unknownext"), "application/octet-stream");
        assert_eq!(MimeRegistry::default().lookup("html"), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let registry = MimeRegistry::parse(TABLE);
        assert_eq!(registry.lookup("gif"), DEFAULT_MIME_TYPE);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_later_entries_overwrite_earlier() {
        let registry = MimeRegistry::parse(TABLE);
        assert_eq!(registry.lookup("txt"), "application/x-custom");
    }

    #[test]
    fn test_content_type_uses_last_dot_of_file_name() {
        let registry = MimeRegistry::parse(TABLE);
        assert_eq!(registry.content_type_for(Path::new("site/index.html")), "text/html");
        assert_eq!(registry.content_type_for(Path::new("archive.txt.png")), "image/png");
        assert_eq!(registry.content_type_for(Path::new("dir.html/README")), DEFAULT_MIME_TYPE);
        assert_eq!(registry.content_type_for(Path::new("trailing.")), DEFAULT_MIME_TYPE);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();

        let registry = MimeRegistry::load(file.path()).await.unwrap();
        assert_eq!(registry.lookup("png"), "image/png");
    }

    #[tokio::test]
    async fn test_load_table_with_latin1_comment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# Gr\xfc\xdfe aus M\xfcnchen\ntext/html html\nimage/png png\n")
            .unwrap();

        let registry = MimeRegistry::load(file.path()).await.unwrap();
        assert_eq!(registry.lookup("html"), "text/html");
        assert_eq!(registry.lookup("png"), "image/png");
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("mime.types");

        let result = MimeRegistry::load(&missing).await;
        assert!(matches!(result, Err(Error::Io { ref path, .. }) if path == &missing));
    }
}
