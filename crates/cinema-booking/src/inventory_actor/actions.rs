//! Custom actions for the inventory actor.
//!
//! Handled by [`impl ActorEntity for Room`](crate::model::Room#impl-ActorEntity-for-Room).

use crate::model::{HoldId, SeatHold, SeatId, SeatStatus};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Claims every listed seat for `ttl`, or none of them.
    Hold { seats: Vec<SeatId>, ttl: Duration },
    /// Marks a hold's seats occupied.
    Confirm { hold: HoldId },
    /// Returns a hold's seats to free. Idempotent.
    Release { hold: HoldId },
    Snapshot,
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone)]
pub enum InventoryActionResult {
    Held(SeatHold),
    Confirmed(Vec<SeatId>),
    /// Seats actually freed. Empty when the hold was unknown.
    Released(Vec<SeatId>),
    Snapshot(Vec<SeatSnapshot>),
}

/// One row of a room snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub seat: SeatId,
    pub status: SeatStatus,
}
