use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Seat label within a room, e.g. `A1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub String);

impl From<&str> for SeatId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SeatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Free,
    /// Claimed by a hold that is waiting on payment.
    Held,
    Occupied,
}

impl Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SeatStatus::Free => "free",
            SeatStatus::Held => "held",
            SeatStatus::Occupied => "occupied",
        };
        write!(f, "{}", label)
    }
}

/// A seat owned by a [`Room`](crate::model::Room).
///
/// Status changes only through the seat inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
}

impl Seat {
    pub fn free(id: SeatId) -> Self {
        Self {
            id,
            status: SeatStatus::Free,
        }
    }
}
