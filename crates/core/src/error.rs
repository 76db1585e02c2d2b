//! Typed failure modes for gateway calls.
//!
//! Every [`Gateway`](crate::gateway::Gateway) operation returns
//! `Result<T, FetchError>`. How a failure is handled is decided at the
//! call site (keep-last-value vs. surface-to-user); the variants here only
//! say *what* went wrong, never what to do about it.

/// A failed gateway call.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced an HTTP response (DNS, connect, TLS,
    /// mid-body disconnect).
    #[error("request failed: {message}")]
    Transport { message: String },

    /// The request exceeded the configured per-request timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body as text, kept for log context.
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("response decode failed: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Build a [`FetchError::Transport`] from any displayable error.
    pub fn transport(error: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: error.to_string(),
        }
    }

    /// Build a [`FetchError::Decode`] from any displayable error.
    pub fn decode(error: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: error.to_string(),
        }
    }
}
