use thiserror::Error;

/// Failures on the fetch path. All of them end up as the gallery's error state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("remote service returned {status} {reason}")]
    RemoteService { status: u16, reason: String },

    /// The body was not an array of item records.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request never produced a response (connect, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
