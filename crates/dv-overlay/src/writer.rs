//! The `OverlayWriter` trait implemented by overlay exporters.

use crate::{ArrowRow, CourierOverlay, OverlayResult, StopRow};

pub trait OverlayWriter {
    fn write_stops(&mut self, rows: &[StopRow]) -> OverlayResult<()>;

    fn write_arrows(&mut self, rows: &[ArrowRow]) -> OverlayResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OverlayResult<()>;

    /// Write every stop and arrow of `overlay`.
    fn write_overlay(&mut self, overlay: &CourierOverlay) -> OverlayResult<()> {
        self.write_stops(&StopRow::from_overlay(overlay))?;
        self.write_arrows(&ArrowRow::from_overlay(overlay))
    }
}
