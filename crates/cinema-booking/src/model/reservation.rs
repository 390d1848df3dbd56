//! The reservation aggregate and its state machine.
//!
//! ```text
//! Pending ──(payment approved)──▶ Confirmed
//!    │                                │
//!    └──(declined / aborted)──▶ Cancelled ◀──(cancel)
//! ```
//!
//! Nothing re-enters `Pending`, and `Cancelled` is terminal.

use crate::model::{Customer, Money, SeatHold, SeatId, Showing};
use crate::notification::{EmailNotifier, NotificationHub, ReservationObserver};
use crate::reservation_actor::ReservationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use uuid::Uuid;

/// Type-safe identifier for Reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reservation_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationState {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationState {
    pub fn can_transition_to(self, next: ReservationState) -> bool {
        use ReservationState::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        )
    }
}

impl Display for ReservationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReservationState::Pending => "pending",
            ReservationState::Confirmed => "confirmed",
            ReservationState::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

/// A customer's claim on a set of seats for one showing.
///
/// # Actor Framework
/// Recorded reservations are managed by the reservation ledger actor; see
/// [`impl ActorEntity for Reservation`](#impl-ActorEntity-for-Reservation) for
/// the `Cancel` and `RegisterObserver` actions.
///
/// Each reservation owns its [`NotificationHub`]. Clones share the observer
/// instances, not the list.
#[derive(Clone)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer: Customer,
    pub showing: Showing,
    pub seats: Vec<SeatId>,
    pub hold: SeatHold,
    pub created_at: DateTime<Utc>,
    pub amount: Money,
    pub transaction_id: Option<String>,
    state: ReservationState,
    hub: NotificationHub,
}

impl Reservation {
    /// Creates a `Pending` reservation for the seats claimed by `hold`.
    ///
    /// The [`EmailNotifier`] is registered as the first observer.
    pub fn new(customer: Customer, showing: Showing, hold: SeatHold, amount: Money) -> Self {
        let mut hub = NotificationHub::new();
        hub.register(Arc::new(EmailNotifier::new()));
        Self {
            id: ReservationId::new(),
            customer,
            showing,
            seats: hold.seats.clone(),
            hold,
            created_at: Utc::now(),
            amount,
            transaction_id: None,
            state: ReservationState::Pending,
            hub,
        }
    }

    pub fn state(&self) -> ReservationState {
        self.state
    }

    /// Appends an observer. Returns the number now registered.
    pub fn register_observer(&mut self, observer: Arc<dyn ReservationObserver>) -> usize {
        self.hub.register(observer);
        self.hub.len()
    }

    pub fn observer_count(&self) -> usize {
        self.hub.len()
    }

    /// Tells every observer, in registration order, about the current state.
    pub async fn notify_observers(&self) {
        self.hub.notify(self).await;
    }

    pub(crate) fn transition(&mut self, next: ReservationState) -> Result<(), ReservationError> {
        if !self.state.can_transition_to(next) {
            return Err(ReservationError::InvalidStateTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }

    pub(crate) fn confirm(&mut self, transaction_id: String) -> Result<(), ReservationError> {
        self.transition(ReservationState::Confirmed)?;
        self.transaction_id = Some(transaction_id);
        Ok(())
    }
}

impl std::fmt::Debug for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reservation")
            .field("id", &self.id)
            .field("customer", &self.customer.id)
            .field("showing", &self.showing.id)
            .field("seats", &self.seats)
            .field("state", &self.state)
            .field("amount", &self.amount)
            .field("transaction_id", &self.transaction_id)
            .field("observers", &self.hub.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HoldId, Movie, RoomId};
    use crate::notification::fixtures::RecordingObserver;
    use tokio::time::Instant;

    fn pending() -> Reservation {
        let customer = Customer::new("Ana", "ana@example.com").unwrap();
        let movie = Movie::new("Matrix", "Sci-Fi", 136).unwrap();
        let showing = Showing::new(movie, Utc::now(), RoomId::from("sala-1")).unwrap();
        let hold = SeatHold {
            hold_id: HoldId::new(),
            room: RoomId::from("sala-1"),
            seats: vec!["A1".into(), "A2".into()],
            expires_at: Instant::now(),
        };
        Reservation::new(customer, showing, hold, Money::from_cents(2000))
    }

    #[test]
    fn test_state_machine_is_closed() {
        use ReservationState::*;
        let all = [Pending, Confirmed, Cancelled];
        let allowed: Vec<(ReservationState, ReservationState)> = all
            .iter()
            .flat_map(|&from| all.iter().map(move |&to| (from, to)))
            .filter(|&(from, to)| from.can_transition_to(to))
            .collect();
        assert_eq!(
            allowed,
            vec![(Pending, Confirmed), (Pending, Cancelled), (Confirmed, Cancelled)]
        );
    }

    #[test]
    fn test_new_reservation_is_pending_with_email_notifier() {
        let reservation = pending();
        assert_eq!(reservation.state(), ReservationState::Pending);
        assert_eq!(reservation.seats, reservation.hold.seats);
        assert_eq!(reservation.observer_count(), 1);
        assert!(reservation.transaction_id.is_none());
    }

    #[test]
    fn test_cancelled_is_terminal() {
        let mut reservation = pending();
        reservation.confirm("tx-1".into()).unwrap();
        reservation.transition(ReservationState::Cancelled).unwrap();

        let err = reservation.transition(ReservationState::Confirmed).unwrap_err();
        assert_eq!(
            err,
            ReservationError::InvalidStateTransition {
                from: ReservationState::Cancelled,
                to: ReservationState::Confirmed,
            }
        );
        assert_eq!(reservation.transaction_id.as_deref(), Some("tx-1"));
    }

    #[tokio::test]
    async fn test_observers_see_post_transition_state() {
        let mut reservation = pending();
        let observer = Arc::new(RecordingObserver::default());
        assert_eq!(reservation.register_observer(observer.clone()), 2);

        reservation.confirm("tx-1".into()).unwrap();
        reservation.notify_observers().await;

        assert_eq!(observer.states(), vec![ReservationState::Confirmed]);
    }
}
