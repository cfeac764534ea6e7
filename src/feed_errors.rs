//! # Feed Error Types Module
//!
//! Error types for the menu-feed HTTP pipeline. These never reach the chat
//! transport directly: the menu feed resolver flattens every variant into
//! its reply string.

/// Transport-layer failures while fetching the menu feed
#[derive(Debug, Clone)]
pub enum FeedError {
    /// Request could not be sent or completed (DNS, connect, timeout)
    Transport(String),
    /// Upstream answered with a non-2xx status; the body prefix is kept
    /// for diagnostics
    HttpStatus { status: u16, body_prefix: String },
    /// Body declared gzip content-encoding but did not decompress
    Decompress(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Transport(msg) => write!(f, "{msg}"),
            FeedError::HttpStatus {
                status,
                body_prefix,
            } => {
                if body_prefix.is_empty() {
                    write!(f, "HTTP-virhe: {status}")
                } else {
                    write!(f, "HTTP-virhe: {status}. Alku: {body_prefix}")
                }
            }
            FeedError::Decompress(msg) => write!(f, "gzip-purku epäonnistui: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Transport(err.to_string())
    }
}
