//! Interaction states.
//!
//! Each state carries exactly the data that is meaningful in it: the pending
//! pickup lives inside `AwaitingDeliveryClick`, the pending pair inside
//! `ReviewingNewDelivery`.  Leaving a state drops its data, so a cancelled
//! flow cannot leak a half-built pair into the next one.

use std::fmt;

use crate::StagedStop;

/// What the next map click means.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    AwaitingUserLocationClick,
    AwaitingWarehouseClick,
    AwaitingPickupClick,
    AwaitingDeliveryClick {
        pickup: StagedStop,
    },
    ReviewingNewDelivery {
        pickup:   StagedStop,
        delivery: StagedStop,
    },
    CollectingNodes,
}

impl InteractionState {
    /// The data-free tag of this state.
    pub fn kind(&self) -> StateKind {
        match self {
            InteractionState::Idle => StateKind::Idle,
            InteractionState::AwaitingUserLocationClick => StateKind::AwaitingUserLocationClick,
            InteractionState::AwaitingWarehouseClick => StateKind::AwaitingWarehouseClick,
            InteractionState::AwaitingPickupClick => StateKind::AwaitingPickupClick,
            InteractionState::AwaitingDeliveryClick { .. } => StateKind::AwaitingDeliveryClick,
            InteractionState::ReviewingNewDelivery { .. } => StateKind::ReviewingNewDelivery,
            InteractionState::CollectingNodes => StateKind::CollectingNodes,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// The pickup of the pair being built, if any.
    pub fn pending_pickup(&self) -> Option<&StagedStop> {
        match self {
            InteractionState::AwaitingDeliveryClick { pickup }
            | InteractionState::ReviewingNewDelivery { pickup, .. } => Some(pickup),
            _ => None,
        }
    }

    /// The delivery of the pair under review, if any.
    pub fn pending_delivery(&self) -> Option<&StagedStop> {
        match self {
            InteractionState::ReviewingNewDelivery { delivery, .. } => Some(delivery),
            _ => None,
        }
    }
}

/// [`InteractionState`] without its payload; cheap to copy into errors,
/// logs, and observer callbacks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    Idle,
    AwaitingUserLocationClick,
    AwaitingWarehouseClick,
    AwaitingPickupClick,
    AwaitingDeliveryClick,
    ReviewingNewDelivery,
    CollectingNodes,
}

impl StateKind {
    /// Operator-facing hint for what to do next.
    pub fn prompt(self) -> &'static str {
        match self {
            StateKind::Idle => "choose an action",
            StateKind::AwaitingUserLocationClick => "click your position on the map",
            StateKind::AwaitingWarehouseClick => "click the warehouse location",
            StateKind::AwaitingPickupClick => "click the pickup point",
            StateKind::AwaitingDeliveryClick => "click the delivery point",
            StateKind::ReviewingNewDelivery => "enter both durations, then confirm",
            StateKind::CollectingNodes => "click nodes to collect, then stop",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StateKind::Idle => "idle",
            StateKind::AwaitingUserLocationClick => "awaiting user location click",
            StateKind::AwaitingWarehouseClick => "awaiting warehouse click",
            StateKind::AwaitingPickupClick => "awaiting pickup click",
            StateKind::AwaitingDeliveryClick => "awaiting delivery click",
            StateKind::ReviewingNewDelivery => "reviewing new delivery",
            StateKind::CollectingNodes => "collecting nodes",
        };
        f.write_str(s)
    }
}
