//! Flat records written by overlay exporters.

use crate::CourierOverlay;

/// One numbered stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRow {
    pub courier:     usize,
    pub visit_order: u32,
    pub label:       String,
    pub node_id:     String,
    /// `NaN` when the node is missing from the graph.
    pub lat:         f64,
    pub lon:         f64,
}

/// One direction marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowRow {
    pub courier:     usize,
    /// 0-based position of the hop among the courier's drawn arrows.
    pub seq:         usize,
    pub from:        String,
    pub to:          String,
    pub mid_lat:     f64,
    pub mid_lon:     f64,
    pub bearing_deg: f64,
}

impl StopRow {
    pub fn from_overlay(o: &CourierOverlay) -> Vec<StopRow> {
        o.stops
            .iter()
            .map(|s| StopRow {
                courier:     o.courier_index,
                visit_order: s.visit_order,
                label:       s.label(),
                node_id:     s.node_id.to_string(),
                lat:         s.pos.map_or(f64::NAN, |p| p.lat),
                lon:         s.pos.map_or(f64::NAN, |p| p.lon),
            })
            .collect()
    }
}

impl ArrowRow {
    pub fn from_overlay(o: &CourierOverlay) -> Vec<ArrowRow> {
        o.arrows
            .iter()
            .enumerate()
            .map(|(seq, a)| ArrowRow {
                courier:     o.courier_index,
                seq,
                from:        a.from.to_string(),
                to:          a.to.to_string(),
                mid_lat:     a.midpoint.lat,
                mid_lon:     a.midpoint.lon,
                bearing_deg: a.bearing_deg,
            })
            .collect()
    }
}
