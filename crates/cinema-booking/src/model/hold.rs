use crate::model::{RoomId, SeatId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tokio::time::Instant;
use uuid::Uuid;

/// Identifier of one successful hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoldId(pub Uuid);

impl HoldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HoldId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for HoldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hold_{}", self.0)
    }
}

/// Token returned by a successful hold.
///
/// Confirm and release are addressed by `hold_id`, never by seat ids, so a
/// stale token can only ever touch the seats it claimed itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatHold {
    pub hold_id: HoldId,
    pub room: RoomId,
    pub seats: Vec<SeatId>,
    /// Unconfirmed holds past this instant are reclaimed by the inventory.
    pub expires_at: Instant,
}
