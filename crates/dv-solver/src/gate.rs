//! At most one solve in flight.
//!
//! A second request while one is running is refused immediately with
//! [`SolverError::InFlight`]; the running call is not affected and nothing
//! is queued.

use tokio::sync::{Semaphore, SemaphorePermit};

use crate::{SolverError, SolverResult};

#[derive(Debug)]
pub struct SingleFlight {
    slot: Semaphore,
}

/// Held for the duration of one call; dropping it frees the slot.
pub type FlightGuard<'a> = SemaphorePermit<'a>;

impl Default for SingleFlight {
    fn default() -> Self {
        Self { slot: Semaphore::new(1) }
    }
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot or fail without waiting.
    pub fn try_enter(&self) -> SolverResult<FlightGuard<'_>> {
        self.slot.try_acquire().map_err(|_| SolverError::InFlight)
    }

    /// Reads the slot without taking it, so polling never blocks an entry.
    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }
}
