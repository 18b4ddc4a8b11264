//! `dv-core` — foundational types for the DeliverIF request editor.
//!
//! This crate is a dependency of every other `dv-*` crate.  It has no `dv-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `DeliveryId`                                |
//! | [`geo`]     | `GeoPoint`, `Bounds`, bearing / midpoint helpers      |
//! | [`time`]    | `DepartureTime` (`H:M:S` warehouse departure)         |
//! | [`config`]  | `EditorConfig`                                        |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EditorConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, GeoPoint};
pub use ids::{DeliveryId, NodeId};
pub use time::DepartureTime;
