//! Error types for reservations.

use crate::inventory_actor::InventoryError;
use crate::model::{ReservationState, SeatId};
use thiserror::Error;

/// Errors surfaced by the reservation engine and the reservation actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReservationError {
    /// Seats not in the showing's room, or an empty or repeated selection.
    #[error("Invalid seats for showing: {seats:?}")]
    InvalidSeatForShowing { seats: Vec<SeatId> },

    #[error("Seats unavailable: {seats:?}")]
    SeatUnavailable { seats: Vec<SeatId> },

    #[error("Payment declined: {reason}")]
    PaymentDeclined { reason: String },

    /// Payment took too long, or the hold lapsed before it could be confirmed.
    #[error("Seat hold expired")]
    SeatHoldExpired,

    /// Unit price times seat count does not fit in `Money`.
    #[error("Amount overflows for {seats} seats")]
    AmountOverflow { seats: usize },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition {
        from: ReservationState,
        to: ReservationState,
    },

    #[error("Reservation not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<InventoryError> for ReservationError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::UnknownSeats(seats) | InventoryError::InvalidSelection(seats) => {
                ReservationError::InvalidSeatForShowing { seats }
            }
            InventoryError::RoomNotFound(_) => {
                ReservationError::InvalidSeatForShowing { seats: Vec::new() }
            }
            InventoryError::SeatsUnavailable(seats) => ReservationError::SeatUnavailable { seats },
            InventoryError::HoldNotFound(_) => ReservationError::SeatHoldExpired,
            InventoryError::InvalidLayout(msg) | InventoryError::ActorCommunicationError(msg) => {
                ReservationError::ActorCommunicationError(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HoldId;

    #[test]
    fn test_inventory_errors_map_to_reservation_errors() {
        let a1 = vec![SeatId::from("A1")];
        assert_eq!(
            ReservationError::from(InventoryError::UnknownSeats(a1.clone())),
            ReservationError::InvalidSeatForShowing { seats: a1.clone() }
        );
        assert_eq!(
            ReservationError::from(InventoryError::SeatsUnavailable(a1.clone())),
            ReservationError::SeatUnavailable { seats: a1 }
        );
        assert_eq!(
            ReservationError::from(InventoryError::HoldNotFound(HoldId::new())),
            ReservationError::SeatHoldExpired
        );
    }
}
