//! Error types for the LiveCoinWatch client library.

use thiserror::Error;

/// The error type for all LiveCoinWatch client operations.
///
/// Only local failures are reported here. A response with a non-2xx status is
/// still returned to the caller as an ordinary `reqwest::Response`.
#[derive(Error, Debug)]
pub enum LiveCoinWatchError {
    /// The request body could not be encoded as JSON
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request never produced a response (DNS, TLS, refused connection, bad URL, timeout)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),
}

impl LiveCoinWatchError {
    /// Check if the body failed to encode.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    /// Check if the HTTP layer failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the transport failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(reqwest_middleware::Error::Reqwest(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the transport failure happened while connecting.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(reqwest_middleware::Error::Reqwest(e)) => e.is_connect(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for LiveCoinWatchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}
