use thiserror::Error;

use dv_core::{GeoPoint, NodeId};
use dv_graph::GraphError;
use dv_request::RequestError;

use crate::StateKind;

/// Everything the editor can refuse.  None of these is fatal: the model is
/// left as it was and the operator may simply try the next action.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no graph loaded; load a map first")]
    NoGraphLoaded,

    #[error("no graph node near {0}")]
    NodeNotResolved(GeoPoint),

    #[error("node {0} has already been collected")]
    DuplicateCollectedNode(NodeId),

    #[error("pickup and delivery durations must both be set before confirming")]
    IncompleteReview,

    #[error("{action} is not available while {state}")]
    InvalidTransition { state: StateKind, action: &'static str },

    #[error("the request has no warehouse; set one before exporting")]
    MissingWarehouse,

    #[error("no request loaded")]
    NoRequestLoaded,

    #[error("no staged delivery at index {index} ({len} staged)")]
    StagedIndex { index: usize, len: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl EditorError {
    /// Soft warnings: the action was ignored but nothing is wrong with the
    /// operator's data.
    pub fn is_soft(&self) -> bool {
        matches!(self, EditorError::DuplicateCollectedNode(_) | EditorError::IncompleteReview)
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
