//! Error types for the inventory actor.

use crate::model::{HoldId, SeatId};
use thiserror::Error;

/// Errors that can occur during seat inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Empty selection, or seats listed more than once (carried here).
    #[error("Invalid seat selection: {0:?}")]
    InvalidSelection(Vec<SeatId>),

    #[error("Seats not in room: {0:?}")]
    UnknownSeats(Vec<SeatId>),

    #[error("Seats not available: {0:?}")]
    SeatsUnavailable(Vec<SeatId>),

    /// The hold was released or expired.
    #[error("Hold not found: {0}")]
    HoldNotFound(HoldId),

    #[error("Invalid room layout: {0}")]
    InvalidLayout(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
