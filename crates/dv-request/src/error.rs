use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request document: <{element}> attribute {attribute:?}: {reason}")]
    Malformed {
        element:   &'static str,
        attribute: &'static str,
        reason:    String,
    },

    #[error("malformed request document: expected exactly one <entrepot>, found {0}")]
    WarehouseCount(usize),

    #[error("malformed request document: {0}")]
    Xml(String),

    #[error("could not write request document: {0}")]
    Write(String),

    #[error("no delivery at index {index} (request has {len})")]
    DeliveryIndex { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RequestError {
    /// `true` for errors caused by the document content.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            RequestError::Malformed { .. } | RequestError::WarehouseCount(_) | RequestError::Xml(_)
        )
    }
}

pub type RequestResult<T> = Result<T, RequestError>;
