//! [`ActorEntity`] implementation for [`Reservation`].

use super::actions::{ReservationAction, ReservationActionResult};
use super::error::ReservationError;
use crate::clients::SeatInventoryClient;
use crate::model::{Reservation, ReservationId, ReservationState};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Reservation {
    type Id = ReservationId;
    type Create = Reservation;
    type Action = ReservationAction;
    type ActionResult = ReservationActionResult;
    type Context = SeatInventoryClient;
    type Error = ReservationError;

    fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Only confirmed reservations are recorded.
    fn from_create_params(reservation: Reservation) -> Result<Self, Self::Error> {
        match reservation.state() {
            ReservationState::Confirmed => Ok(reservation),
            other => Err(ReservationError::InvalidStateTransition {
                from: other,
                to: ReservationState::Confirmed,
            }),
        }
    }

    /// # Actions
    /// - `Cancel`: release the hold, then transition. Observers are left to the
    ///   caller. A second cancel returns `AlreadyCancelled` without side effects.
    /// - `RegisterObserver`: append to the hub.
    async fn handle_action(
        &mut self,
        action: ReservationAction,
        inventory: &SeatInventoryClient,
    ) -> Result<ReservationActionResult, Self::Error> {
        match action {
            ReservationAction::Cancel => {
                if self.state() == ReservationState::Cancelled {
                    return Ok(ReservationActionResult::AlreadyCancelled(self.clone()));
                }
                // Seats first: if the release fails the reservation stays active.
                let freed = inventory.release(&self.hold).await?;
                self.transition(ReservationState::Cancelled)?;
                info!(reservation = %self.id, seats = freed.len(), "Cancelled");
                Ok(ReservationActionResult::Cancelled(self.clone()))
            }
            ReservationAction::RegisterObserver(observer) => Ok(
                ReservationActionResult::ObserverRegistered(self.register_observer(observer)),
            ),
        }
    }
}
