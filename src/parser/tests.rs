//! Tests for the HTTP request parser.

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use tokio::io::BufReader;

    use crate::parser::{read_head, Error, HeaderView, Method, RequestLine, MAX_LINE_LENGTH};

    fn view(lines: &[&str]) -> HeaderView {
        HeaderView::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_parse_simple_get_request_line() {
        let line = RequestLine::from_str("GET /index.html HTTP/1.0").unwrap();
        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "/index.html");
        assert_eq!(line.version.as_deref(), Some("HTTP/1.0"));
        assert_eq!(line.method().unwrap(), Method::GET);
    }

    #[test]
    fn test_two_token_request_line_has_no_version() {
        let line = RequestLine::from_str("HEAD /").unwrap();
        assert_eq!(line.target, "/");
        assert_eq!(line.version, None);
    }

    #[test]
    fn test_collapses_repeated_whitespace() {
        let line = RequestLine::from_str("GET \t /a.txt    HTTP/1.1").unwrap();
        assert_eq!(line.target, "/a.txt");
        assert_eq!(line.version.as_deref(), Some("HTTP/1.1"));
    }

    #[test]
    fn test_wrong_token_counts() {
        for input in ["GET", "GET /a HTTP/1.0 extra", "GET /a HTTP/1.0 x y", ""] {
            let result = RequestLine::from_str(input);
            assert!(
                matches!(result, Err(Error::MalformedRequestLine(_))),
                "{input:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_invalid_http_version() {
        let result = RequestLine::from_str("GET /index.html FTP/1.0");
        assert_eq!(result, Err(Error::InvalidVersion("FTP/1.0".to_string())));
    }

    #[test]
    fn test_target_must_start_with_slash() {
        let result = RequestLine::from_str("GET index.html HTTP/1.0");
        assert_eq!(result, Err(Error::InvalidPath("index.html".to_string())));
    }

    #[test]
    fn test_version_checked_before_target() {
        let result = RequestLine::from_str("GET index.html HTTX/1.0");
        assert!(matches!(result, Err(Error::InvalidVersion(_))));
    }

    #[test]
    fn test_unknown_method_is_kept_as_token() {
        let line = RequestLine::from_str("BREW /pot HTTP/1.0").unwrap();
        assert_eq!(line.method, "BREW");
        assert_eq!(line.method(), Err(Error::InvalidMethod("BREW".to_string())));
    }

    #[test]
    fn test_method_is_case_sensitive() {
        assert!(Method::from_str("get").is_err());
        assert_eq!(Method::from_str("DELETE").unwrap(), Method::DELETE);
    }

    #[test]
    fn test_empty_view_has_no_request_line() {
        assert_eq!(view(&[]).request_line(), Err(Error::EmptyRequest));
    }

    #[test]
    fn test_user_agent_lookup() {
        let headers = view(&["GET / HTTP/1.0", "Host: example.com", "User-Agent: curl/8.0"]);
        assert_eq!(headers.user_agent(), "curl/8.0");

        let headers = view(&["GET / HTTP/1.0", "uSeR-aGeNt:Mozilla/5.0 (X11)  "]);
        assert_eq!(headers.user_agent(), "Mozilla/5.0 (X11)");

        let headers = view(&["GET / HTTP/1.0", "Host: example.com"]);
        assert_eq!(headers.user_agent(), "unknown");
    }

    #[test]
    fn test_last_user_agent_wins() {
        let headers = view(&["GET / HTTP/1.0", "User-Agent: first", "User-Agent: second"]);
        assert_eq!(headers.user_agent(), "second");
    }

    #[tokio::test]
    async fn test_read_head_stops_at_blank_line() {
        let input: &[u8] = b"GET /a HTTP/1.0\r\nUser-Agent: test\r\n\r\nGET /b HTTP/1.0\r\n\r\n";
        let mut reader = BufReader::new(input);

        let head = read_head(&mut reader).await.unwrap().unwrap();
        assert_eq!(head.lines(), ["GET /a HTTP/1.0", "User-Agent: test"]);
        assert_eq!(head.request_line().unwrap().target, "/a");
    }

    #[tokio::test]
    async fn test_read_head_accepts_bare_lf_and_eof() {
        let input: &[u8] = b"GET /a\nHost: x";
        let mut reader = BufReader::new(input);

        let head = read_head(&mut reader).await.unwrap().unwrap();
        assert_eq!(head.lines(), ["GET /a", "Host: x"]);
    }

    #[tokio::test]
    async fn test_read_head_on_closed_stream() {
        let input: &[u8] = b"";
        let mut reader = BufReader::new(input);
        assert!(read_head(&mut reader).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_head_blank_first_line() {
        let input: &[u8] = b"\r\n";
        let mut reader = BufReader::new(input);

        let head = read_head(&mut reader).await.unwrap().unwrap();
        assert!(head.lines().is_empty());
        assert_eq!(head.request_line(), Err(Error::EmptyRequest));
    }

    #[tokio::test]
    async fn test_read_head_replaces_invalid_utf8() {
        let input: &[u8] = b"GET /caf\xff HTTP/1.0\r\n\r\n";
        let mut reader = BufReader::new(input);

        let head = read_head(&mut reader).await.unwrap().unwrap();
        assert_eq!(head.request_line().unwrap().target, "/caf\u{FFFD}");
    }

    #[tokio::test]
    async fn test_read_head_rejects_overlong_line() {
        let mut input = b"GET /".to_vec();
        input.extend(std::iter::repeat(b'a').take(MAX_LINE_LENGTH * 4));
        let mut reader = BufReader::new(input.as_slice());

        let err = read_head(&mut reader).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_read_head_accepts_line_at_limit() {
        let mut input = vec![b'x'; MAX_LINE_LENGTH];
        input.extend_from_slice(b"\r\n\r\n");
        let mut reader = BufReader::new(input.as_slice());

        let head = read_head(&mut reader).await.unwrap().unwrap();
        assert_eq!(head.lines()[0].len(), MAX_LINE_LENGTH);
    }
}
