//! Geographic coordinate type and planar helpers.
//!
//! `GeoPoint` stores `f64` latitude/longitude exactly as parsed from the
//! graph document.  The editor works in raw degree space: nearest-node
//! snapping, segment midpoints, and arrow bearings are all planar, which is
//! accurate enough at city scale.

use std::fmt;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Squared Euclidean distance in lat/lon space.
    #[inline]
    pub fn distance_2(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Planar midpoint of the segment `self → other`.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new((self.lat + other.lat) * 0.5, (self.lon + other.lon) * 0.5)
    }

    /// Bearing of `self → other` in degrees, `atan2(Δlat, Δlon)`.
    ///
    /// 0° points east, 90° north; the range is `(-180, 180]`.
    #[inline]
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        (other.lat - self.lat).atan2(other.lon - self.lon).to_degrees()
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box `[[min_lat, min_lon], [max_lat, max_lon]]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl Bounds {
    pub fn new(min: GeoPoint, max: GeoPoint) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` when the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut b = Bounds::new(first, first);
        for p in iter {
            b.min.lat = b.min.lat.min(p.lat);
            b.min.lon = b.min.lon.min(p.lon);
            b.max.lat = b.max.lat.max(p.lat);
            b.max.lon = b.max.lon.max(p.lon);
        }
        Some(b)
    }

    /// `[[min_lat, min_lon], [max_lat, max_lon]]`, the shape map viewports expect.
    pub fn as_array(&self) -> [[f64; 2]; 2] {
        [[self.min.lat, self.min.lon], [self.max.lat, self.max.lon]]
    }

    pub fn center(&self) -> GeoPoint {
        self.min.midpoint(self.max)
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min.lat..=self.max.lat).contains(&p.lat)
            && (self.min.lon..=self.max.lon).contains(&p.lon)
    }

    /// Corner-to-corner great-circle length in metres.
    pub fn diagonal_m(&self) -> f64 {
        self.min.distance_m(self.max)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
