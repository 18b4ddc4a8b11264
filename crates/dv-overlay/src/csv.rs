//! CSV overlay backend.
//!
//! Creates two files in the configured output directory:
//! - `overlay_stops.csv`
//! - `overlay_arrows.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::writer::OverlayWriter;
use crate::{ArrowRow, OverlayResult, StopRow};

/// Writes courier overlays to two CSV files.
pub struct CsvOverlayWriter {
    stops:    Writer<File>,
    arrows:   Writer<File>,
    rows:     usize,
    finished: bool,
}

impl CsvOverlayWriter {
    /// Create `dir` if needed, open the two CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OverlayResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut stops = Writer::from_path(dir.join("overlay_stops.csv"))?;
        stops.write_record(["courier", "visit_order", "label", "node_id", "lat", "lon"])?;

        let mut arrows = Writer::from_path(dir.join("overlay_arrows.csv"))?;
        arrows.write_record(["courier", "seq", "from", "to", "mid_lat", "mid_lon", "bearing_deg"])?;

        Ok(Self { stops, arrows, rows: 0, finished: false })
    }
}

impl OverlayWriter for CsvOverlayWriter {
    fn write_stops(&mut self, rows: &[StopRow]) -> OverlayResult<()> {
        for row in rows {
            self.stops.write_record(&[
                row.courier.to_string(),
                row.visit_order.to_string(),
                row.label.clone(),
                row.node_id.clone(),
                row.lat.to_string(),
                row.lon.to_string(),
            ])?;
        }
        self.rows += rows.len();
        Ok(())
    }

    fn write_arrows(&mut self, rows: &[ArrowRow]) -> OverlayResult<()> {
        for row in rows {
            self.arrows.write_record(&[
                row.courier.to_string(),
                row.seq.to_string(),
                row.from.clone(),
                row.to.clone(),
                row.mid_lat.to_string(),
                row.mid_lon.to_string(),
                format!("{:.3}", row.bearing_deg),
            ])?;
        }
        self.rows += rows.len();
        Ok(())
    }

    fn finish(&mut self) -> OverlayResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stops.flush()?;
        self.arrows.flush()?;
        info!(rows = self.rows, "overlay CSV written");
        Ok(())
    }
}
