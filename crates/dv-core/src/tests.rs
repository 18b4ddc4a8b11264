//! Unit tests for dv-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::HashMap;

    use crate::{DeliveryId, NodeId};

    #[test]
    fn display_is_raw_string() {
        assert_eq!(NodeId::new("25175791").to_string(), "25175791");
    }

    #[test]
    fn delivery_id_from_index() {
        assert_eq!(DeliveryId::for_index(0).as_str(), "delivery-0");
        assert_eq!(DeliveryId::for_index(12).as_str(), "delivery-12");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut m = HashMap::new();
        m.insert(NodeId::from("a"), 1);
        assert_eq!(m.get("a"), Some(&1));
        assert_eq!(m.get("b"), None);
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, GeoPoint};

    #[test]
    fn squared_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert_eq!(a.distance_2(b), 25.0);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let o = GeoPoint::new(0.0, 0.0);
        assert!((o.bearing_deg(GeoPoint::new(0.0, 1.0)) - 0.0).abs() < 1e-9); // east
        assert!((o.bearing_deg(GeoPoint::new(1.0, 0.0)) - 90.0).abs() < 1e-9); // north
        assert!((o.bearing_deg(GeoPoint::new(0.0, -1.0)) - 180.0).abs() < 1e-9); // west
        assert!((o.bearing_deg(GeoPoint::new(-1.0, 0.0)) + 90.0).abs() < 1e-9); // south
    }

    #[test]
    fn midpoint() {
        let m = GeoPoint::new(45.0, 4.0).midpoint(GeoPoint::new(46.0, 5.0));
        assert_eq!(m, GeoPoint::new(45.5, 4.5));
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let d = GeoPoint::new(45.0, 4.8).distance_m(GeoPoint::new(46.0, 4.8));
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn bounds_from_points() {
        let b = Bounds::from_points([
            GeoPoint::new(45.76, 4.86),
            GeoPoint::new(45.74, 4.88),
            GeoPoint::new(45.75, 4.85),
        ])
        .unwrap();
        assert_eq!(b.as_array(), [[45.74, 4.85], [45.76, 4.88]]);
        assert!(b.contains(GeoPoint::new(45.75, 4.87)));
        assert!(!b.contains(GeoPoint::new(45.77, 4.87)));
    }

    #[test]
    fn bounds_of_nothing() {
        assert!(Bounds::from_points(std::iter::empty()).is_none());
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, DepartureTime};

    #[test]
    fn parses_unpadded_document_form() {
        let t: DepartureTime = "8:0:0".parse().unwrap();
        assert_eq!(t, DepartureTime::new(8, 0, 0).unwrap());
        assert_eq!(t.to_document_string(), "8:0:0");
        assert_eq!(t.to_string(), "08:00:00");
    }

    #[test]
    fn parses_padded_form() {
        let t: DepartureTime = "07:45:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 45, 30));
        assert_eq!(t.seconds_since_midnight(), 7 * 3600 + 45 * 60 + 30);
    }

    #[test]
    fn rejects_malformed() {
        let cases = [
            "", "8", "8:0", "8:0:0:0", "a:b:c", "24:0:0", "8:60:0", "8:0:60", "-1:0:0", "008:0:0",
        ];
        for bad in cases {
            let err = bad.parse::<DepartureTime>().unwrap_err();
            assert!(matches!(err, CoreError::InvalidTime { .. }), "{bad:?} should fail");
        }
    }

    #[test]
    fn default_is_eight_am() {
        assert_eq!(DepartureTime::default().to_string(), "08:00:00");
    }
}

#[cfg(test)]
mod config {
    use crate::EditorConfig;

    #[test]
    fn default_fallback_bounds() {
        let c = EditorConfig::default();
        assert_eq!(c.fallback_bounds.as_array(), [[45.75, 4.85], [45.76, 4.86]]);
    }
}
