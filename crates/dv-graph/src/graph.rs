//! Road-graph document and builder.
//!
//! # Data layout
//!
//! Nodes are kept in a `Vec` in **document order** plus an id → slot map.
//! Document order is observable: nearest-node ties resolve to the node that
//! appears first, so the vector is never re-sorted.
//!
//! Segments are directed and purely descriptive (origin, destination,
//! length, street name).  No reverse segment is implied and nothing in this
//! crate routes over them.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `[lat, lon]` is bulk-loaded at build time and
//! backs [`SpatialIndexResolver`](crate::SpatialIndexResolver).

use std::fmt;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;
use tracing::warn;

use dv_core::{Bounds, GeoPoint, NodeId};

// ── Records ───────────────────────────────────────────────────────────────────

/// One graph node.  Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

impl Node {
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.pos.lat
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.pos.lon
    }
}

/// One directed road segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub origin:      NodeId,
    pub destination: NodeId,
    /// Length in metres as given by the document.
    pub length:      f64,
    /// Empty when the document omits the street name.
    pub street_name: String,
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lat, lon]` point and the node's slot in
/// document order.
#[derive(Clone)]
pub(crate) struct NodeEntry {
    point:          [f64; 2],
    pub(crate) slot: u32,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space, computed exactly as
    /// [`GeoPoint::distance_2`] so both resolvers agree bit for bit.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── GraphDocument ─────────────────────────────────────────────────────────────

/// A loaded road graph.
///
/// Created once per document load and replaced wholesale on the next one;
/// read-only in between.  Build with [`GraphDocumentBuilder`] or
/// [`parse_graph`](crate::parse_graph).
pub struct GraphDocument {
    nodes:       Vec<Node>,
    slot_of:     FxHashMap<NodeId, u32>,
    segments:    Vec<Segment>,
    bounds:      Bounds,
    spatial_idx: RTree<NodeEntry>,
}

impl GraphDocument {
    /// A graph with no nodes or segments, framed by `fallback_bounds`.
    pub fn empty(fallback_bounds: Bounds) -> Self {
        GraphDocumentBuilder::new().build(fallback_bounds)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Min/max over all node coordinates, or the fallback box for an empty
    /// graph.  Never degenerate `[∞, -∞]`.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// All nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.slot_of.get(id).map(|&slot| &self.nodes[slot as usize])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slot_of.contains_key(id)
    }

    /// Coordinate of `id`, or `None` when the graph has no such node.
    #[inline]
    pub fn position(&self, id: &str) -> Option<GeoPoint> {
        self.node(id).map(|n| n.pos)
    }

    /// Segments leaving `id`, in document order.
    pub fn segments_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments.iter().filter(move |s| s.origin.as_str() == id)
    }

    /// `(origin, destination)` coordinates of every segment whose endpoints
    /// both exist in the graph: the map's road decoration layer.
    pub fn segment_polylines(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.segments.iter().filter_map(|s| {
            Some((self.position(s.origin.as_str())?, self.position(s.destination.as_str())?))
        })
    }

    pub(crate) fn node_at(&self, slot: u32) -> &Node {
        &self.nodes[slot as usize]
    }

    pub(crate) fn spatial_index(&self) -> &RTree<NodeEntry> {
        &self.spatial_idx
    }
}

/// Summary only; the R-tree and id map mirror `nodes`.
impl fmt::Debug for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphDocument")
            .field("nodes", &self.nodes.len())
            .field("segments", &self.segments.len())
            .field("bounds", &self.bounds)
            .finish()
    }
}

// ── GraphDocumentBuilder ──────────────────────────────────────────────────────

/// Construct a [`GraphDocument`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use dv_core::{EditorConfig, GeoPoint};
/// use dv_graph::GraphDocumentBuilder;
///
/// let mut b = GraphDocumentBuilder::new();
/// b.add_node("a", GeoPoint::new(45.750, 4.850));
/// b.add_node("b", GeoPoint::new(45.751, 4.852));
/// b.add_segment("a", "b", 120.5, "Rue Danton");
/// let graph = b.build(EditorConfig::FALLBACK_BOUNDS);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.segment_count(), 1); // directed: no reverse segment
/// ```
#[derive(Default)]
pub struct GraphDocumentBuilder {
    nodes:    Vec<Node>,
    slot_of:  FxHashMap<NodeId, u32>,
    segments: Vec<Segment>,
}

impl GraphDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and segments.
    pub fn with_capacity(nodes: usize, segments: usize) -> Self {
        let mut slot_of = FxHashMap::default();
        slot_of.reserve(nodes);
        Self {
            nodes: Vec::with_capacity(nodes),
            slot_of,
            segments: Vec::with_capacity(segments),
        }
    }

    /// Add a node.
    ///
    /// A repeated id replaces the earlier coordinate but keeps the earlier
    /// position in iteration order.
    pub fn add_node(&mut self, id: impl Into<NodeId>, pos: GeoPoint) {
        let id = id.into();
        if let Some(&slot) = self.slot_of.get(&id) {
            warn!(node = %id, "duplicate node id in graph document; keeping the last coordinates");
            self.nodes[slot as usize].pos = pos;
            return;
        }
        let slot = self.nodes.len() as u32;
        self.slot_of.insert(id.clone(), slot);
        self.nodes.push(Node { id, pos });
    }

    /// Add a **directed** segment.  Endpoints are not required to exist.
    pub fn add_segment(
        &mut self,
        origin:      impl Into<NodeId>,
        destination: impl Into<NodeId>,
        length:      f64,
        street_name: impl Into<String>,
    ) {
        self.segments.push(Segment {
            origin:      origin.into(),
            destination: destination.into(),
            length,
            street_name: street_name.into(),
        });
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn segment_count(&self) -> usize { self.segments.len() }

    /// Consume the builder and produce a [`GraphDocument`].
    ///
    /// `fallback_bounds` is used only when no node was added.
    pub fn build(self, fallback_bounds: Bounds) -> GraphDocument {
        let bounds = Bounds::from_points(self.nodes.iter().map(|n| n.pos))
            .unwrap_or(fallback_bounds);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| NodeEntry {
                point: [n.pos.lat, n.pos.lon],
                slot:  i as u32,
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        GraphDocument {
            nodes: self.nodes,
            slot_of: self.slot_of,
            segments: self.segments,
            bounds,
            spatial_idx,
        }
    }
}
