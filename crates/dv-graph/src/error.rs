//! Graph-document error type.

use thiserror::Error;

/// Errors produced by `dv-graph`.
///
/// Every variant except `Io` means the document itself is malformed; a
/// failed load leaves the caller's previous graph untouched.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("malformed graph document: <{element}> attribute {attribute:?}: {reason}")]
    Malformed {
        element:   &'static str,
        attribute: &'static str,
        reason:    String,
    },

    #[error("malformed graph document: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// `true` for errors caused by the document content rather than I/O.
    pub fn is_malformed(&self) -> bool {
        matches!(self, GraphError::Malformed { .. } | GraphError::Xml(_))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
