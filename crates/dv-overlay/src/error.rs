//! Error types for dv-overlay.

use thiserror::Error;

/// Errors that can occur when exporting overlays.  Computing an overlay
/// never fails.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OverlayError>`.
pub type OverlayResult<T> = Result<T, OverlayError>;
