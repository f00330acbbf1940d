use std::fmt;

/// Unified error type for backend communication.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, …).
    Transport(String),
    /// The response body could not be decoded into the expected shape.
    Decode(String),
    /// The backend answered with a non-success envelope.
    Backend(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {msg}"),
            ClientError::Decode(msg) => write!(f, "decode error: {msg}"),
            ClientError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Result type alias using [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;
