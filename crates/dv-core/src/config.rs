//! Editor configuration.

use crate::{Bounds, DepartureTime, GeoPoint};

/// Settings the interaction layer falls back on when the loaded documents
/// do not provide a value.
///
/// Typically built with `Default` and adjusted by the application crate
/// from CLI flags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorConfig {
    /// Departure time given to a warehouse created by a map click or by the
    /// first collected node when no request is loaded.  Default: 08:00:00.
    pub default_departure: DepartureTime,

    /// Viewport used for a graph with zero nodes.  Default: central Lyon,
    /// `[[45.75, 4.85], [45.76, 4.86]]`.
    pub fallback_bounds: Bounds,
}

impl EditorConfig {
    pub const FALLBACK_BOUNDS: Bounds = Bounds {
        min: GeoPoint { lat: 45.75, lon: 4.85 },
        max: GeoPoint { lat: 45.76, lon: 4.86 },
    };
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_departure: DepartureTime::default(),
            fallback_bounds:   Self::FALLBACK_BOUNDS,
        }
    }
}
