use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status; `message` is the response body, unmodified.
    #[error("service error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("a route computation is already in progress")]
    InFlight,

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid service URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{var}={value:?}: {reason}")]
    Config { var: &'static str, value: String, reason: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;
