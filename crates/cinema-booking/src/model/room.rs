//! A room's seat inventory.
//!
//! [`Room`] is managed by the inventory actor (see [`crate::inventory_actor`]).
//! Its hold bookkeeping lives here as plain synchronous methods so the actor's
//! message handler stays a thin dispatch.

use crate::inventory_actor::{InventoryError, SeatSnapshot};
use crate::model::{HoldId, Seat, SeatHold, SeatId, SeatStatus};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::time::Duration;
use tokio::time::Instant;

/// Type-safe identifier for Rooms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct HoldRecord {
    seats: Vec<SeatId>,
    expires_at: Instant,
    confirmed: bool,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    seats: Vec<Seat>,
    index: HashMap<SeatId, usize>,
    holds: HashMap<HoldId, HoldRecord>,
}

/// Payload for creating a room. Seat order is the room's numbering.
#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub id: RoomId,
    pub seats: Vec<SeatId>,
}

impl RoomCreate {
    /// Seats `A1..A{capacity}`.
    pub fn numbered(id: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: RoomId(id.into()),
            seats: (1..=capacity).map(|n| SeatId(format!("A{n}"))).collect(),
        }
    }

    pub fn with_seats<S: Into<SeatId>>(id: impl Into<String>, seats: impl IntoIterator<Item = S>) -> Self {
        Self {
            id: RoomId(id.into()),
            seats: seats.into_iter().map(Into::into).collect(),
        }
    }
}

impl Room {
    /// Builds a room with every seat free.
    ///
    /// # Errors
    /// [`InventoryError::InvalidLayout`] for an empty room id, zero seats or a
    /// repeated seat label.
    pub fn new(params: RoomCreate) -> Result<Self, InventoryError> {
        if params.id.0.trim().is_empty() {
            return Err(InventoryError::InvalidLayout("room id must not be empty".into()));
        }
        if params.seats.is_empty() {
            return Err(InventoryError::InvalidLayout(format!(
                "room {} has no seats",
                params.id
            )));
        }
        let mut index = HashMap::with_capacity(params.seats.len());
        for (position, seat) in params.seats.iter().enumerate() {
            if index.insert(seat.clone(), position).is_some() {
                return Err(InventoryError::InvalidLayout(format!(
                    "seat {} appears twice in room {}",
                    seat, params.id
                )));
            }
        }
        Ok(Self {
            id: params.id,
            seats: params.seats.into_iter().map(Seat::free).collect(),
            index,
            holds: HashMap::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn status_of(&self, seat: &SeatId) -> Option<SeatStatus> {
        self.index.get(seat).map(|&i| self.seats[i].status)
    }

    /// Number of holds not yet released, confirmed or otherwise.
    pub fn active_holds(&self) -> usize {
        self.holds.len()
    }

    /// Frees the seats of every unconfirmed hold whose deadline is at or before `now`.
    pub(crate) fn reclaim_expired(&mut self, now: Instant) -> Vec<HoldId> {
        let expired: Vec<HoldId> = self
            .holds
            .iter()
            .filter(|(_, hold)| !hold.confirmed && hold.expires_at <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            if let Some(hold) = self.holds.remove(id) {
                self.set_status(&hold.seats, SeatStatus::Free);
            }
        }
        expired
    }

    /// Claims every seat in `requested` or none of them.
    ///
    /// Checks run in order and nothing is mutated until all pass: an empty or
    /// repeated selection, then unknown seats, then seats that are not free.
    pub(crate) fn hold(
        &mut self,
        requested: Vec<SeatId>,
        ttl: Duration,
        now: Instant,
    ) -> Result<SeatHold, InventoryError> {
        let mut seen = HashSet::with_capacity(requested.len());
        let repeated: Vec<SeatId> = requested
            .iter()
            .filter(|seat| !seen.insert(*seat))
            .cloned()
            .collect();
        if requested.is_empty() || !repeated.is_empty() {
            return Err(InventoryError::InvalidSelection(repeated));
        }

        let unknown: Vec<SeatId> = requested
            .iter()
            .filter(|seat| !self.index.contains_key(*seat))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(InventoryError::UnknownSeats(unknown));
        }

        let taken: Vec<SeatId> = requested
            .iter()
            .filter(|seat| self.status_of(seat) != Some(SeatStatus::Free))
            .cloned()
            .collect();
        if !taken.is_empty() {
            return Err(InventoryError::SeatsUnavailable(taken));
        }

        self.set_status(&requested, SeatStatus::Held);
        let hold_id = HoldId::new();
        let expires_at = now + ttl;
        self.holds.insert(
            hold_id,
            HoldRecord {
                seats: requested.clone(),
                expires_at,
                confirmed: false,
            },
        );
        Ok(SeatHold {
            hold_id,
            room: self.id.clone(),
            seats: requested,
            expires_at,
        })
    }

    /// Turns a hold's seats into occupied seats. Confirming twice is a no-op.
    pub(crate) fn confirm(&mut self, hold_id: HoldId) -> Result<Vec<SeatId>, InventoryError> {
        let seats = match self.holds.get_mut(&hold_id) {
            Some(hold) if hold.confirmed => return Ok(hold.seats.clone()),
            Some(hold) => {
                hold.confirmed = true;
                hold.seats.clone()
            }
            None => return Err(InventoryError::HoldNotFound(hold_id)),
        };
        self.set_status(&seats, SeatStatus::Occupied);
        Ok(seats)
    }

    /// Frees a hold's seats, held or occupied. Unknown holds free nothing.
    pub(crate) fn release(&mut self, hold_id: HoldId) -> Vec<SeatId> {
        match self.holds.remove(&hold_id) {
            Some(hold) => {
                self.set_status(&hold.seats, SeatStatus::Free);
                hold.seats
            }
            None => Vec::new(),
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<SeatSnapshot> {
        self.seats
            .iter()
            .map(|seat| SeatSnapshot {
                seat: seat.id.clone(),
                status: seat.status,
            })
            .collect()
    }

    fn set_status(&mut self, seats: &[SeatId], status: SeatStatus) {
        for seat in seats {
            if let Some(&i) = self.index.get(seat) {
                self.seats[i].status = status;
            }
        }
    }
}
