//! Overlay computation for courier paths.
//!
//! # Path convention
//!
//! A courier path starts and ends at the warehouse.  Only the interior
//! elements (index `1..len-1`) are numbered.  Each interior node is matched
//! against the request: the first delivery (in request order) whose pickup or
//! delivery node equals it gives the label, pickup checked first.  A node
//! matching no delivery is still drawn but gets no number, and numbering
//! continues without a gap.
//!
//! Each courier is processed on its own; visit numbers restart at 1.

use std::fmt;

use tracing::debug;

use dv_core::{GeoPoint, NodeId};
use dv_graph::GraphDocument;
use dv_request::{DeliveryRequest, StopKind};

use crate::palette::color_for;

// ── Input ─────────────────────────────────────────────────────────────────────

/// One courier's visiting order as returned by the solver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourierPath {
    nodes: Vec<NodeId>,
}

impl CourierPath {
    pub fn new<I, T>(nodes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self { nodes: nodes.into_iter().map(Into::into).collect() }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Everything between the two warehouse endpoints.
    pub fn interior(&self) -> &[NodeId] {
        match self.nodes.len() {
            0..=2 => &[],
            n => &self.nodes[1..n - 1],
        }
    }
}

impl From<Vec<NodeId>> for CourierPath {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Arrow drawn halfway along one hop of a path.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionMarker {
    pub from:        NodeId,
    pub to:          NodeId,
    pub midpoint:    GeoPoint,
    /// `atan2(Δlat, Δlon)` in degrees; 0 points east, 90 north.
    pub bearing_deg: f64,
}

/// A numbered pickup or delivery along a courier path.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberedStop {
    pub node_id:        NodeId,
    /// `None` when the node is missing from the graph.
    pub pos:            Option<GeoPoint>,
    /// 1-based, per courier.
    pub visit_order:    u32,
    pub kind:           StopKind,
    /// 0-based index of the matched delivery in the request.
    pub delivery_index: usize,
}

impl NumberedStop {
    /// `P<k>` or `D<k>`, `k` being the 1-based delivery position.
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.letter(), self.delivery_index + 1)
    }

    /// `P1(3)`: the label followed by the visit order.
    pub fn label_with_order(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NumberedStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", self.kind.letter(), self.delivery_index + 1, self.visit_order)
    }
}

/// Everything needed to draw one courier's route.
#[derive(Clone, Debug, PartialEq)]
pub struct CourierOverlay {
    pub courier_index: usize,
    pub color:         &'static str,
    pub polyline:      Vec<GeoPoint>,
    pub arrows:        Vec<DirectionMarker>,
    pub stops:         Vec<NumberedStop>,
}

impl CourierOverlay {
    /// Straight-line length of the polyline in metres.
    pub fn length_m(&self) -> f64 {
        self.polyline.windows(2).map(|w| w[0].distance_m(w[1])).sum()
    }
}

// ── Computation ───────────────────────────────────────────────────────────────

/// Compute one overlay per path, courier indices following slice order.
pub fn compute_overlays(
    graph:   &GraphDocument,
    request: &DeliveryRequest,
    paths:   &[CourierPath],
) -> Vec<CourierOverlay> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| compute_overlay(graph, request, i, p))
        .collect()
}

/// Compute the overlay of the courier at `courier_index`.
pub fn compute_overlay(
    graph:         &GraphDocument,
    request:       &DeliveryRequest,
    courier_index: usize,
    path:          &CourierPath,
) -> CourierOverlay {
    let polyline: Vec<GeoPoint> = path
        .nodes()
        .iter()
        .filter_map(|id| graph.position(id.as_str()))
        .collect();

    let arrows = path
        .nodes()
        .windows(2)
        .filter_map(|w| {
            let a = graph.position(w[0].as_str())?;
            let b = graph.position(w[1].as_str())?;
            Some(DirectionMarker {
                from:        w[0].clone(),
                to:          w[1].clone(),
                midpoint:    a.midpoint(b),
                bearing_deg: a.bearing_deg(b),
            })
        })
        .collect();

    let mut stops = Vec::with_capacity(path.interior().len());
    let mut visit_order = 0u32;
    for id in path.interior() {
        let Some((delivery_index, kind)) = request.locate_stop(id.as_str()) else {
            debug!(courier = courier_index, node = %id, "path node matches no delivery");
            continue;
        };
        visit_order += 1;
        stops.push(NumberedStop {
            node_id: id.clone(),
            pos: graph.position(id.as_str()),
            visit_order,
            kind,
            delivery_index,
        });
    }

    debug!(
        courier = courier_index,
        nodes = path.len(),
        drawn = polyline.len(),
        numbered = stops.len(),
        "overlay computed"
    );

    CourierOverlay {
        courier_index,
        color: color_for(courier_index),
        polyline,
        arrows,
        stops,
    }
}
