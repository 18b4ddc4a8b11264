//! Unit tests for dv-overlay.

use dv_core::{DepartureTime, EditorConfig, GeoPoint, NodeId};
use dv_graph::{GraphDocument, GraphDocumentBuilder};
use dv_request::{DeliveryRequest, NewDelivery, Warehouse};

use crate::CourierPath;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// W:(0,0)  P1:(0,1)  D1:(1,1)  P2:(1,0)  D2:(2,0)
fn graph() -> GraphDocument {
    let mut b = GraphDocumentBuilder::new();
    b.add_node("W", GeoPoint::new(0.0, 0.0));
    b.add_node("P1", GeoPoint::new(0.0, 1.0));
    b.add_node("D1", GeoPoint::new(1.0, 1.0));
    b.add_node("P2", GeoPoint::new(1.0, 0.0));
    b.add_node("D2", GeoPoint::new(2.0, 0.0));
    b.build(EditorConfig::FALLBACK_BOUNDS)
}

fn request(pairs: &[(&str, &str)]) -> DeliveryRequest {
    let mut r = DeliveryRequest::new(Warehouse {
        node_id:   NodeId::from("W"),
        departure: DepartureTime::default(),
    });
    for (p, d) in pairs {
        r.push_delivery(NewDelivery {
            pickup_node_id:    NodeId::from(*p),
            delivery_node_id:  NodeId::from(*d),
            pickup_duration:   0,
            delivery_duration: 0,
        });
    }
    r
}

fn path(ids: &[&str]) -> CourierPath {
    CourierPath::new(ids.iter().copied())
}

// ── Numbering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod numbering {
    use super::*;
    use crate::compute_overlay;
    use dv_request::StopKind;

    #[test]
    fn single_delivery_round_trip() {
        let route = path(&["W", "P1", "D1", "W"]);
        let o = compute_overlay(&graph(), &request(&[("P1", "D1")]), 0, &route);
        let labels: Vec<_> = o.stops.iter().map(|s| s.label_with_order()).collect();
        assert_eq!(labels, ["P1(1)", "D1(2)"]);
        assert_eq!(o.stops[0].kind, StopKind::Pickup);
        assert_eq!(o.stops[1].kind, StopKind::Delivery);
        assert!(o.stops.iter().all(|s| s.node_id.as_str() != "W"));
    }

    #[test]
    fn label_uses_request_position_not_visit_order() {
        let r = request(&[("P1", "D1"), ("P2", "D2")]);
        let o = compute_overlay(&graph(), &r, 0, &path(&["W", "P2", "P1", "D2", "D1", "W"]));
        let labels: Vec<_> = o.stops.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["P2(1)", "P1(2)", "D2(3)", "D1(4)"]);
        assert_eq!(o.stops[0].label(), "P2");
        assert_eq!(o.stops[0].delivery_index, 1);
    }

    #[test]
    fn unknown_interior_node_is_skipped_without_gap() {
        let route = path(&["W", "P1", "ghost", "D1", "W"]);
        let o = compute_overlay(&graph(), &request(&[("P1", "D1")]), 0, &route);
        let orders: Vec<_> = o.stops.iter().map(|s| s.visit_order).collect();
        assert_eq!(orders, [1, 2]);
        assert_eq!(o.stops[1].node_id.as_str(), "D1");
    }

    #[test]
    fn first_matching_delivery_wins() {
        let r = request(&[("P1", "D1"), ("D1", "P2")]);
        let o = compute_overlay(&graph(), &r, 0, &path(&["W", "D1", "W"]));
        assert_eq!(o.stops[0].label(), "D1");
    }

    #[test]
    fn short_paths_have_no_numbering() {
        let r = request(&[("P1", "D1")]);
        for ids in [&[][..], &["W"][..], &["W", "W"][..]] {
            assert!(compute_overlay(&graph(), &r, 0, &path(ids)).stops.is_empty());
        }
    }

    #[test]
    fn couriers_count_independently() {
        let r = request(&[("P1", "D1"), ("P2", "D2")]);
        let paths = [path(&["W", "P1", "D1", "W"]), path(&["W", "P2", "D2", "W"])];
        let all = crate::compute_overlays(&graph(), &r, &paths);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].courier_index, 1);
        assert_eq!(all[1].stops[0].to_string(), "P2(1)");
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use super::*;
    use crate::{color_for, compute_overlay, PALETTE};

    #[test]
    fn polyline_skips_missing_nodes() {
        let o = compute_overlay(&graph(), &request(&[]), 0, &path(&["W", "ghost", "P1"]));
        assert_eq!(o.polyline, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]);
    }

    #[test]
    fn arrows_need_both_endpoints() {
        let o = compute_overlay(&graph(), &request(&[]), 0, &path(&["W", "P1", "ghost", "D1"]));
        assert_eq!(o.arrows.len(), 1);
        assert_eq!(o.arrows[0].from.as_str(), "W");
        assert_eq!(o.arrows[0].to.as_str(), "P1");
    }

    #[test]
    fn arrow_midpoint_and_bearing() {
        let o = compute_overlay(&graph(), &request(&[]), 0, &path(&["W", "P1", "D1", "W"]));
        // W→P1 heads east, P1→D1 north, D1→W south-west.
        assert_eq!(o.arrows[0].midpoint, GeoPoint::new(0.0, 0.5));
        assert!((o.arrows[0].bearing_deg - 0.0).abs() < 1e-9);
        assert!((o.arrows[1].bearing_deg - 90.0).abs() < 1e-9);
        assert!((o.arrows[2].bearing_deg + 135.0).abs() < 1e-9);
    }

    #[test]
    fn colors_cycle_through_palette() {
        assert_eq!(color_for(0), "#ef4444");
        assert_eq!(color_for(PALETTE.len()), color_for(0));
        assert_eq!(color_for(7), PALETTE[2]);
        let o = compute_overlay(&graph(), &request(&[]), 6, &path(&[]));
        assert_eq!(o.color, PALETTE[1]);
    }

    #[test]
    fn length_follows_polyline() {
        let o = compute_overlay(&graph(), &request(&[]), 0, &path(&["W", "P1"]));
        let expected = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        assert!((o.length_m() - expected).abs() < 1e-6);
        assert_eq!(compute_overlay(&graph(), &request(&[]), 0, &path(&["W"])).length_m(), 0.0);
    }
}

// ── CSV export ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{compute_overlay, CsvOverlayWriter, OverlayWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_and_headers() {
        let dir = tmp();
        let mut w = CsvOverlayWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(
            headers(dir.path().join("overlay_stops.csv")),
            ["courier", "visit_order", "label", "node_id", "lat", "lon"]
        );
        assert_eq!(
            headers(dir.path().join("overlay_arrows.csv")),
            ["courier", "seq", "from", "to", "mid_lat", "mid_lon", "bearing_deg"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = CsvOverlayWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("overlay_stops.csv").exists());
    }

    #[test]
    fn overlay_rows_written() {
        let dir = tmp();
        let route = path(&["W", "P1", "D1", "W"]);
        let o = compute_overlay(&graph(), &request(&[("P1", "D1")]), 1, &route);
        let mut w = CsvOverlayWriter::new(dir.path()).unwrap();
        w.write_overlay(&o).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(dir.path().join("overlay_stops.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");  // courier
        assert_eq!(&rows[0][1], "1");  // visit_order
        assert_eq!(&rows[0][2], "P1"); // label
        assert_eq!(&rows[1][3], "D1"); // node_id

        let mut rdr = csv::Reader::from_path(dir.path().join("overlay_arrows.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][6], "90.000");
    }
}
