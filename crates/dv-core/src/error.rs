//! Error type shared by the value types in this crate.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid departure time {value:?}: {reason}")]
    InvalidTime { value: String, reason: &'static str },
}

/// Shorthand result type for `dv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
