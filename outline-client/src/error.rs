use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Access key not found: {0}")]
    KeyNotFound(String),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True for failures inside the HTTP layer: building the request (e.g. an
    /// unparseable URL), connect, DNS, TLS, timeout, or reading the body
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
