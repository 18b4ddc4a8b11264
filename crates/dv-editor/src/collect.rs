//! The bulk click-and-collect buffer and its interpretation.
//!
//! Collected nodes are kept in click order without duplicates.  Their
//! meaning is decided only at export time:
//!
//! | Request has a warehouse? | First node       | Every other node               |
//! |--------------------------|------------------|--------------------------------|
//! | yes                      | a pickup         | pickup/delivery pairs in order |
//! | no                       | the warehouse    | pickup/delivery pairs in order |
//!
//! A trailing node without a partner is reported as `unpaired` and is not
//! part of any generated pair.

use dv_graph::Node;
use dv_request::NewDelivery;

use crate::{StagedStop, StopType};

#[derive(Clone, Debug, Default)]
pub struct CollectedNodes {
    nodes: Vec<Node>,
}

impl CollectedNodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id.as_str() == id)
    }

    /// Append `node` unless its id is already present.  Returns whether it
    /// was added.
    pub fn push(&mut self, node: Node) -> bool {
        if self.contains(node.id.as_str()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Split the buffer into warehouse, pairs, and leftover.
    pub fn interpret(&self, has_warehouse: bool) -> CollectedPlan<'_> {
        let (warehouse, rest) = match (has_warehouse, self.nodes.split_first()) {
            (false, Some((first, rest))) => (Some(first), rest),
            _ => (None, self.nodes.as_slice()),
        };

        let mut chunks = rest.chunks_exact(2);
        let pairs = chunks.by_ref().map(|c| (&c[0], &c[1])).collect();
        let unpaired = chunks.remainder().first();

        CollectedPlan { warehouse, pairs, unpaired }
    }
}

/// A borrowed reading of [`CollectedNodes`].
#[derive(Debug)]
pub struct CollectedPlan<'a> {
    pub warehouse: Option<&'a Node>,
    /// `(pickup, delivery)` in click order.
    pub pairs:     Vec<(&'a Node, &'a Node)>,
    pub unpaired:  Option<&'a Node>,
}

impl CollectedPlan<'_> {
    /// Request records for the pairs; collected pairs carry no durations.
    pub fn new_deliveries(&self) -> Vec<NewDelivery> {
        self.pairs
            .iter()
            .map(|(p, d)| NewDelivery {
                pickup_node_id:    p.id.clone(),
                delivery_node_id:  d.id.clone(),
                pickup_duration:   0,
                delivery_duration: 0,
            })
            .collect()
    }

    /// Markers for every collected node, the unpaired one typed as a pickup.
    pub fn stops(&self) -> Vec<StagedStop> {
        let mut out = Vec::with_capacity(self.pairs.len() * 2 + 2);
        if let Some(w) = self.warehouse {
            out.push(StagedStop::at_node(w, StopType::Warehouse));
        }
        for (p, d) in &self.pairs {
            out.push(StagedStop::at_node(p, StopType::Pickup));
            out.push(StagedStop::at_node(d, StopType::Delivery));
        }
        if let Some(u) = self.unpaired {
            out.push(StagedStop::at_node(u, StopType::Pickup));
        }
        out
    }
}
