//! Core request types: `Warehouse`, `Delivery`, and `DeliveryRequest`.
//!
//! # Ordering
//!
//! Deliveries keep the order in which they were read or appended.  The order
//! matters for display, export, and the `P<k>`/`D<k>` labels of the route
//! overlay, but it carries no routing meaning: the solver picks the visiting
//! order.
//!
//! # Ids
//!
//! A delivery's id is always `"delivery-" + index`.  Appends take the next
//! index and removals renumber the tail, so ids never go stale.

use dv_core::{DeliveryId, DepartureTime, NodeId};

use crate::{RequestError, RequestResult};

// ── Warehouse ─────────────────────────────────────────────────────────────────

/// The depot every courier leaves from and returns to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warehouse {
    pub node_id:   NodeId,
    pub departure: DepartureTime,
}

// ── Delivery ──────────────────────────────────────────────────────────────────

/// One pickup/delivery pair.  Durations are service times in seconds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    pub id:                DeliveryId,
    pub pickup_node_id:    NodeId,
    pub delivery_node_id:  NodeId,
    pub pickup_duration:   u32,
    pub delivery_duration: u32,
}

impl Delivery {
    /// Which end of this delivery `node` is, pickup checked first.
    pub fn stop_kind(&self, node: &str) -> Option<StopKind> {
        if self.pickup_node_id.as_str() == node {
            Some(StopKind::Pickup)
        } else if self.delivery_node_id.as_str() == node {
            Some(StopKind::Delivery)
        } else {
            None
        }
    }

    /// The `(pickup, delivery, pickup_duration, delivery_duration)` tuple,
    /// i.e. everything except the positional id.
    pub fn content(&self) -> (&NodeId, &NodeId, u32, u32) {
        (
            &self.pickup_node_id,
            &self.delivery_node_id,
            self.pickup_duration,
            self.delivery_duration,
        )
    }
}

/// A pickup/delivery pair that does not belong to a request yet.
///
/// Produced by the editor's staging area and consumed by
/// [`DeliveryRequest::push_delivery`] and [`write_request`](crate::write_request).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewDelivery {
    pub pickup_node_id:    NodeId,
    pub delivery_node_id:  NodeId,
    pub pickup_duration:   u32,
    pub delivery_duration: u32,
}

/// Role of a node within a delivery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopKind {
    Pickup,
    Delivery,
}

impl StopKind {
    /// `'P'` or `'D'`, the prefix of overlay labels.
    pub fn letter(self) -> char {
        match self {
            StopKind::Pickup => 'P',
            StopKind::Delivery => 'D',
        }
    }
}

// ── DeliveryRequest ───────────────────────────────────────────────────────────

/// A warehouse plus an ordered list of deliveries.
///
/// Mutated incrementally by the editor (warehouse reassignment, delivery
/// append, removal by index) and replaced wholesale on document load.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRequest {
    pub warehouse: Warehouse,
    deliveries:    Vec<Delivery>,
}

impl DeliveryRequest {
    /// A request with no deliveries yet.
    pub fn new(warehouse: Warehouse) -> Self {
        Self { warehouse, deliveries: Vec::new() }
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Move the warehouse to `node_id`, keeping its departure time.
    pub fn set_warehouse_node(&mut self, node_id: NodeId) {
        self.warehouse.node_id = node_id;
    }

    /// Append a delivery, assigning the next sequential id.
    pub fn push_delivery(&mut self, new: NewDelivery) -> &Delivery {
        let index = self.deliveries.len();
        self.deliveries.push(Delivery {
            id:                DeliveryId::for_index(index),
            pickup_node_id:    new.pickup_node_id,
            delivery_node_id:  new.delivery_node_id,
            pickup_duration:   new.pickup_duration,
            delivery_duration: new.delivery_duration,
        });
        &self.deliveries[index]
    }

    /// Remove the delivery at `index`; later deliveries shift down and are
    /// renumbered.  The warehouse is untouched.
    pub fn remove_delivery(&mut self, index: usize) -> RequestResult<Delivery> {
        if index >= self.deliveries.len() {
            return Err(RequestError::DeliveryIndex { index, len: self.deliveries.len() });
        }
        let removed = self.deliveries.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Reassign `delivery-<index>` ids in current order.
    pub fn renumber(&mut self) {
        for (i, d) in self.deliveries.iter_mut().enumerate() {
            d.id = DeliveryId::for_index(i);
        }
    }

    /// The first delivery (in request order) that visits `node`, with its
    /// zero-based index and the role `node` plays in it.
    pub fn locate_stop(&self, node: &str) -> Option<(usize, StopKind)> {
        self.deliveries
            .iter()
            .enumerate()
            .find_map(|(i, d)| d.stop_kind(node).map(|kind| (i, kind)))
    }
}
