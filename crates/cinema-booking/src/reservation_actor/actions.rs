//! Custom actions for the reservation actor.

use crate::model::Reservation;
use crate::notification::ReservationObserver;
use std::sync::Arc;

#[derive(Clone)]
pub enum ReservationAction {
    /// Releases the seats and moves to `Cancelled`.
    Cancel,
    RegisterObserver(Arc<dyn ReservationObserver>),
}

impl std::fmt::Debug for ReservationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationAction::Cancel => write!(f, "Cancel"),
            ReservationAction::RegisterObserver(observer) => {
                write!(f, "RegisterObserver({})", observer.name())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ReservationActionResult {
    /// Cancelled by this request. Observers have not been told yet.
    Cancelled(Reservation),
    /// Was already cancelled. Nothing changed and nobody was notified.
    AlreadyCancelled(Reservation),
    /// Number of observers now registered.
    ObserverRegistered(usize),
}
