//! `dv-solver` — talking to the route-solving service.
//!
//! The service owns the optimisation and a small store of named graph and
//! request documents.  This crate only moves data across that boundary:
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`config`]   | `SolverConfig` (defaults, `DELIVERIF_*` environment)        |
//! | [`protocol`] | wire types: `DocumentSource`, `SolveRequest`, `SolveResponse`, `UploadReceipt` |
//! | [`client`]   | `SolverClient`: solve, list, fetch, upload                  |
//! | [`gate`]     | `SingleFlight`: at most one solve in flight                 |
//! | [`catalog`]  | `DocumentCatalog`: cached document names, explicit refresh  |
//! | [`error`]    | `SolverError`, `SolverResult<T>`                            |
//!
//! Failures never touch the caller's model: every method either returns a
//! complete result or an error.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod protocol;

#[cfg(test)]
mod tests;

pub use catalog::DocumentCatalog;
pub use client::SolverClient;
pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use gate::SingleFlight;
pub use protocol::{DocumentSource, SolveRequest, SolveResponse, UploadReceipt};
