//! Nearest-node resolution: snapping a map click to a graph node.
//!
//! Distance is squared Euclidean distance in lat/lon degree space, not a
//! geodesic.  Ties resolve to the node that comes first in document order.
//! Both implementations return `None` only for a graph without nodes.

use dv_core::GeoPoint;

use crate::{GraphDocument, Node};

/// Strategy for finding the node closest to a coordinate.
///
/// Implementations must be deterministic: the same graph and coordinate
/// always yield the same node.
pub trait NodeResolver {
    fn resolve<'g>(&self, graph: &'g GraphDocument, pos: GeoPoint) -> Option<&'g Node>;
}

/// Scan every node.  O(N) per query, no extra memory.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScanResolver;

impl NodeResolver for LinearScanResolver {
    fn resolve<'g>(&self, graph: &'g GraphDocument, pos: GeoPoint) -> Option<&'g Node> {
        let mut best: Option<(&Node, f64)> = None;
        for node in graph.nodes() {
            let d = node.pos.distance_2(pos);
            // Strict `<`: the first node at the minimum distance keeps the spot.
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((node, d));
            }
        }
        best.map(|(node, _)| node)
    }
}

/// Query the graph's R-tree.  O(log N) per query.
///
/// Equidistant candidates are drained from the nearest-neighbour iterator
/// and the one with the lowest document position wins, so results match
/// [`LinearScanResolver`] exactly.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpatialIndexResolver;

impl NodeResolver for SpatialIndexResolver {
    fn resolve<'g>(&self, graph: &'g GraphDocument, pos: GeoPoint) -> Option<&'g Node> {
        let mut candidates = graph
            .spatial_index()
            .nearest_neighbor_iter_with_distance_2(&[pos.lat, pos.lon]);
        let (first, best_d) = candidates.next()?;
        let slot = candidates
            .take_while(|(_, d)| *d == best_d)
            .map(|(e, _)| e.slot)
            .fold(first.slot, u32::min);
        Some(graph.node_at(slot))
    }
}
