//! # Reservation Engine
//!
//! Orchestrates a booking across the seat inventory, the caller's payment
//! strategy and the reservation ledger.
//!
//! ```text
//! create ──▶ hold seats ──▶ process_payment ──▶ confirm hold ──▶ Confirmed ──▶ record ──▶ notify
//!                │                 │                 │                             │
//!                ▼                 ▼                 ▼                             ▼
//!         SeatUnavailable   release + Declined   release + SeatHoldExpired   release + error
//!                           release + SeatHoldExpired (timeout)
//! ```
//!
//! The engine runs in the caller's task. Only the inventory operations are
//! serialized; the payment call runs concurrently with everyone else's, bounded
//! by [`BookingConfig::payment_timeout`]. Any failure after a successful hold
//! releases that hold before the error is returned.
//!
//! Once payment is approved the rest of `create` runs in a spawned task, so a
//! caller that gives up mid-commit still ends with either a recorded
//! reservation or free seats. Observers are told only after the reservation is
//! recorded, and always from the caller's side, never from inside an actor.

use crate::clients::{Cancellation, ReservationClient, SeatInventoryClient};
use crate::config::BookingConfig;
use crate::inventory_actor::{InventoryError, SeatSnapshot};
use crate::model::{Customer, CustomerId, Reservation, ReservationId, RoomId, SeatHold, SeatId, Showing};
use crate::notification::ReservationObserver;
use crate::payment::{PaymentOutcome, PaymentStrategy};
use crate::reservation_actor::ReservationError;
use actor_framework::ActorClient;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Everything needed to attempt one booking.
#[derive(Clone)]
pub struct ReservationRequest {
    pub customer: Customer,
    pub showing: Showing,
    pub seat_ids: Vec<SeatId>,
    /// Registered after the default email notifier, in this order.
    pub observers: Vec<Arc<dyn ReservationObserver>>,
}

impl ReservationRequest {
    pub fn new<S: Into<SeatId>>(
        customer: Customer,
        showing: Showing,
        seat_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            customer,
            showing,
            seat_ids: seat_ids.into_iter().map(Into::into).collect(),
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ReservationObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

#[derive(Clone)]
pub struct ReservationEngine {
    inventory: SeatInventoryClient,
    reservations: ReservationClient,
    config: BookingConfig,
}

impl ReservationEngine {
    pub fn new(
        inventory: SeatInventoryClient,
        reservations: ReservationClient,
        config: BookingConfig,
    ) -> Self {
        Self {
            inventory,
            reservations,
            config,
        }
    }

    /// Books `request.seat_ids` for `request.showing`, charging through `payment`.
    ///
    /// `payment` is called at most once, and only after every seat is held.
    ///
    /// # Errors
    /// - [`ReservationError::InvalidSeatForShowing`]: empty or repeated selection, or
    ///   seats the room doesn't have. Nothing is held.
    /// - [`ReservationError::SeatUnavailable`]: some seat is held or occupied. Nothing is held.
    /// - [`ReservationError::PaymentDeclined`]: the hold is released.
    /// - [`ReservationError::SeatHoldExpired`]: payment timed out or the hold lapsed
    ///   before confirmation. The hold is released.
    /// - [`ReservationError::AmountOverflow`]: the total does not fit. The hold is released.
    #[instrument(
        skip(self, request, payment),
        fields(customer = %request.customer.id, showing = %request.showing.id)
    )]
    pub async fn create(
        &self,
        request: ReservationRequest,
        payment: &dyn PaymentStrategy,
    ) -> Result<Reservation, ReservationError> {
        validate_selection(&request.seat_ids)?;

        let ReservationRequest {
            customer,
            showing,
            seat_ids,
            observers,
        } = request;

        let hold = self
            .inventory
            .hold(&showing.room, seat_ids, self.config.hold_ttl())
            .await?;
        info!(hold = %hold.hold_id, seats = hold.seats.len(), "Seats held");

        let seat_count = hold.seats.len() as u64;
        let Some(amount) = self.config.unit_price().checked_times(seat_count) else {
            self.release_quietly(&hold).await;
            return Err(ReservationError::AmountOverflow {
                seats: hold.seats.len(),
            });
        };

        let mut reservation = Reservation::new(customer, showing, hold.clone(), amount);
        for observer in observers {
            reservation.register_observer(observer);
        }

        let outcome =
            match tokio::time::timeout(self.config.payment_timeout(), payment.process_payment(amount)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(hold = %hold.hold_id, "Payment timed out");
                    self.release_quietly(&hold).await;
                    return Err(ReservationError::SeatHoldExpired);
                }
            };

        let transaction_id = match outcome {
            PaymentOutcome::Approved { transaction_id } => transaction_id,
            PaymentOutcome::Declined { reason } => {
                info!(%amount, %reason, "Payment declined");
                self.release_quietly(&hold).await;
                return Err(ReservationError::PaymentDeclined { reason });
            }
        };
        info!(%amount, %transaction_id, "Payment approved");

        // The customer is charged: finish in a task of its own so dropping
        // this future cannot leave confirmed seats without a recorded owner.
        let engine = self.clone();
        tokio::spawn(async move { engine.commit(reservation, transaction_id).await })
            .await
            .map_err(|e| ReservationError::ActorCommunicationError(e.to_string()))?
    }

    /// Confirm the hold, record the reservation, then notify.
    async fn commit(
        &self,
        mut reservation: Reservation,
        transaction_id: String,
    ) -> Result<Reservation, ReservationError> {
        let hold = reservation.hold.clone();
        if let Err(e) = self.inventory.confirm(&hold).await {
            // Charged but the seats are gone. Needs a manual refund.
            warn!(%transaction_id, error = %e, "Hold lapsed after payment");
            self.release_quietly(&hold).await;
            return Err(e.into());
        }

        reservation.confirm(transaction_id)?;

        if let Err(e) = self.reservations.record(reservation.clone()).await {
            warn!(reservation = %reservation.id, error = %e, "Recording failed");
            self.release_quietly(&hold).await;
            return Err(e);
        }
        info!(reservation = %reservation.id, "Reservation confirmed");

        reservation.notify_observers().await;
        Ok(reservation)
    }

    /// Cancels a recorded reservation, freeing its seats, then notifies its observers.
    ///
    /// Cancelling an already-cancelled reservation returns it unchanged and
    /// notifies nobody.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ReservationId) -> Result<Reservation, ReservationError> {
        match self.reservations.cancel(id).await? {
            Cancellation::Cancelled(reservation) => {
                reservation.notify_observers().await;
                Ok(reservation)
            }
            Cancellation::AlreadyCancelled(reservation) => Ok(reservation),
        }
    }

    pub async fn reservation(&self, id: ReservationId) -> Result<Reservation, ReservationError> {
        self.reservations
            .get(id)
            .await?
            .ok_or_else(|| ReservationError::NotFound(id.to_string()))
    }

    pub async fn reservations_for(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Reservation>, ReservationError> {
        self.reservations.list_for_customer(customer).await
    }

    /// Attaches an observer to a recorded reservation. Returns the observer count.
    pub async fn register_observer(
        &self,
        id: ReservationId,
        observer: Arc<dyn ReservationObserver>,
    ) -> Result<usize, ReservationError> {
        self.reservations.register_observer(id, observer).await
    }

    pub async fn snapshot(&self, room: &RoomId) -> Result<Vec<SeatSnapshot>, InventoryError> {
        self.inventory.snapshot(room).await
    }

    async fn release_quietly(&self, hold: &SeatHold) {
        if let Err(e) = self.inventory.release(hold).await {
            warn!(hold = %hold.hold_id, error = %e, "Release failed");
        }
    }
}

/// Non-empty, no seat listed twice.
fn validate_selection(seats: &[SeatId]) -> Result<(), ReservationError> {
    if seats.is_empty() {
        return Err(ReservationError::InvalidSeatForShowing { seats: Vec::new() });
    }
    let mut seen = HashSet::with_capacity(seats.len());
    let repeated: Vec<SeatId> = seats
        .iter()
        .filter(|seat| !seen.insert(*seat))
        .cloned()
        .collect();
    if !repeated.is_empty() {
        return Err(ReservationError::InvalidSeatForShowing { seats: repeated });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_validation() {
        assert!(validate_selection(&["A1".into(), "A2".into()]).is_ok());
        assert_eq!(
            validate_selection(&[]).unwrap_err(),
            ReservationError::InvalidSeatForShowing { seats: Vec::new() }
        );
        assert_eq!(
            validate_selection(&["A1".into(), "A2".into(), "A1".into()]).unwrap_err(),
            ReservationError::InvalidSeatForShowing {
                seats: vec!["A1".into()]
            }
        );
    }
}
