//! `dv-overlay` — turns solver output into something a map can draw.
//!
//! The solver returns one ordered node-id sequence per courier.  For each
//! sequence this crate derives:
//!
//! * the polyline through the nodes that exist in the graph,
//! * one direction marker per consecutive pair (midpoint + bearing),
//! * visit numbers for the interior stops with their `P<k>`/`D<k>` labels,
//! * a palette color picked from the courier index.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`overlay`] | `CourierPath`, `CourierOverlay`, `compute_overlays`   |
//! | [`palette`] | `PALETTE`, `color_for`                                |
//! | [`row`]     | flat `StopRow` / `ArrowRow` records for export        |
//! | [`writer`]  | `OverlayWriter` trait                                 |
//! | [`csv`]     | `CsvOverlayWriter`: `overlay_stops.csv`, `overlay_arrows.csv` |
//! | [`error`]   | `OverlayError`, `OverlayResult<T>`                    |

pub mod csv;
pub mod error;
pub mod overlay;
pub mod palette;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvOverlayWriter;
pub use error::{OverlayError, OverlayResult};
pub use overlay::{
    compute_overlay, compute_overlays, CourierOverlay, CourierPath, DirectionMarker, NumberedStop,
};
pub use palette::{color_for, PALETTE};
pub use row::{ArrowRow, StopRow};
pub use writer::OverlayWriter;
