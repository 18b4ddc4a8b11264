//! Unconfirmed stops and the review panel's duration fields.

use std::fmt;

use dv_core::{GeoPoint, NodeId};
use dv_graph::Node;
use dv_request::NewDelivery;

/// Role a staged stop will take once confirmed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StopType {
    Pickup,
    Delivery,
    Warehouse,
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopType::Pickup => "pickup",
            StopType::Delivery => "delivery",
            StopType::Warehouse => "warehouse",
        })
    }
}

/// A graph node picked by a click but not yet part of the request.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedStop {
    pub node_id:   NodeId,
    pub pos:       GeoPoint,
    pub stop_type: StopType,
    /// Service time in seconds, once entered.
    pub duration:  Option<u32>,
}

impl StagedStop {
    pub fn at_node(node: &Node, stop_type: StopType) -> Self {
        Self { node_id: node.id.clone(), pos: node.pos, stop_type, duration: None }
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }
}

/// A confirmed pickup/delivery pair waiting to be exported.
///
/// The two slots are explicit, so a pair can never be half-present.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedPair {
    pub pickup:   StagedStop,
    pub delivery: StagedStop,
}

impl StagedPair {
    /// Request record for this pair; unset durations become 0.
    pub fn to_new_delivery(&self) -> NewDelivery {
        NewDelivery {
            pickup_node_id:    self.pickup.node_id.clone(),
            delivery_node_id:  self.delivery.node_id.clone(),
            pickup_duration:   self.pickup.duration.unwrap_or(0),
            delivery_duration: self.delivery.duration.unwrap_or(0),
        }
    }
}

/// The two duration inputs of the review panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DurationFields {
    pub pickup:   Option<u32>,
    pub delivery: Option<u32>,
}

impl DurationFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Both values, or `None` while either field is empty.
    pub fn both(&self) -> Option<(u32, u32)> {
        Some((self.pickup?, self.delivery?))
    }
}
