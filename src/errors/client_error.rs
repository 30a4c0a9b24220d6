use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single location fetch.
///
/// Every failure crosses the client boundary as one of these variants;
/// nothing panics and no transport error leaks through raw.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connectivity failure: no route, DNS failure, timeout, or a connection
    /// that died while reading the body.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("server returned HTTP {status}")]
    Server { status: StatusCode },

    /// The response body does not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
