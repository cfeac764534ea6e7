//! # HTTP Fetch Module
//!
//! Low-level GET for the menu feed. The feed host sometimes serves gzip, so
//! the fetcher advertises `Accept-Encoding: gzip` and decompresses the body
//! itself rather than relying on transparent client decoding. The decoded
//! text has any leading UTF-8 BOM stripped.

use flate2::read::GzDecoder;
use reqwest::header;
use reqwest::Client;
use std::io::Read;

use crate::feed_errors::FeedError;

/// Characters of a response body kept for diagnostics.
const BODY_PREFIX_CHARS: usize = 200;

/// A decoded HTTP response body together with the content-encoding the
/// server declared for it.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub text: String,
    pub content_encoding: Option<String>,
}

/// Fetch `url` and return its body as text.
///
/// On a non-2xx status the body is still read and decoded first, so the
/// returned [`FeedError::HttpStatus`] can carry a bounded prefix of whatever
/// the server said. Timeouts and the User-Agent come from the shared client.
pub async fn fetch_text(client: &Client, url: &str) -> Result<FetchedDocument, FeedError> {
    let response = client
        .get(url)
        .header(header::ACCEPT, "application/json")
        .header(header::ACCEPT_ENCODING, "gzip")
        .send()
        .await?;

    let status = response.status();
    let content_encoding = response
        .headers()
        .get(header::CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_ascii_lowercase());

    let bytes = response.bytes().await.map_err(|err| FeedError::HttpStatus {
        status: status.as_u16(),
        body_prefix: err.to_string(),
    })?;

    let text = decode_body(&bytes, content_encoding.as_deref())?;

    if !status.is_success() {
        return Err(FeedError::HttpStatus {
            status: status.as_u16(),
            body_prefix: text.chars().take(BODY_PREFIX_CHARS).collect(),
        });
    }

    Ok(FetchedDocument {
        text,
        content_encoding,
    })
}

/// Decode raw body bytes to text, gunzipping first when the declared
/// content-encoding mentions gzip.
pub fn decode_body(bytes: &[u8], content_encoding: Option<&str>) -> Result<String, FeedError> {
    let decoded;
    let plain = if content_encoding.is_some_and(|enc| enc.contains("gzip")) {
        let mut buf = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut buf)
            .map_err(|err| FeedError::Decompress(err.to_string()))?;
        decoded = buf;
        decoded.as_slice()
    } else {
        bytes
    };

    let text = String::from_utf8_lossy(plain);
    Ok(strip_bom(&text).to_string())
}

fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    /// Test that a plain body passes through untouched
    #[test]
    fn test_decode_plain_body() {
        let text = decode_body(b"{\"ok\":true}", None).unwrap();
        assert_eq!(text, "{\"ok\":true}");
    }

    /// Test that a leading byte-order-mark is stripped
    #[test]
    fn test_decode_strips_bom() {
        let text = decode_body("\u{feff}{}".as_bytes(), None).unwrap();
        assert_eq!(text, "{}");
    }

    /// Test that a gzip-encoded body is decompressed
    #[test]
    fn test_decode_gzip_body() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"MenusForDays\":[]}").unwrap();
        let compressed = encoder.finish().unwrap();

        let text = decode_body(&compressed, Some("gzip")).unwrap();
        assert_eq!(text, "{\"MenusForDays\":[]}");
    }

    /// Test that garbage declared as gzip is a decompression error
    #[test]
    fn test_decode_gzip_garbage_fails() {
        let result = decode_body(b"definitely not gzip", Some("gzip"));
        assert!(matches!(result, Err(FeedError::Decompress(_))));
    }

    /// Test that the content-encoding match is substring-based (e.g. "x-gzip")
    #[test]
    fn test_decode_x_gzip_variant() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"abc").unwrap();
        let compressed = encoder.finish().unwrap();

        let text = decode_body(&compressed, Some("x-gzip")).unwrap();
        assert_eq!(text, "abc");
    }
}
