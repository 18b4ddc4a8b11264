//! `dv-request` — the delivery request: one warehouse plus ordered
//! pickup/delivery pairs, and its XML exchange format.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`request`] | `DeliveryRequest`, `Warehouse`, `Delivery`, `NewDelivery`, `StopKind` |
//! | [`loader`]  | `parse_request`, `load_request_file`                         |
//! | [`writer`]  | `write_request`                                              |
//! | [`error`]   | `RequestError`, `RequestResult<T>`                           |
//!
//! # Round trip
//!
//! For any document with a warehouse,
//! `parse_request(&write_request(Some(&parse_request(doc)?), &[])?)?` has the
//! same warehouse and the same `(pickup, delivery, durations)` tuples in the
//! same order.  Delivery ids are regenerated from positions, never read.

pub mod error;
pub mod loader;
pub mod request;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{RequestError, RequestResult};
pub use loader::{load_request_file, parse_request};
pub use request::{Delivery, DeliveryRequest, NewDelivery, StopKind, Warehouse};
pub use writer::write_request;
