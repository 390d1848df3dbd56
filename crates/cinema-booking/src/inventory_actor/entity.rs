//! [`ActorEntity`] implementation for [`Room`].

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::model::{Room, RoomCreate, RoomId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Room {
    type Id = RoomId;
    type Create = RoomCreate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &RoomId {
        &self.id
    }

    fn from_create_params(params: RoomCreate) -> Result<Self, Self::Error> {
        Room::new(params)
    }

    /// Expired holds are reclaimed first, then the action runs. Nothing here
    /// awaits, so the room is never observed half-updated.
    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &Self::Context,
    ) -> Result<InventoryActionResult, Self::Error> {
        let now = Instant::now();
        let reclaimed = self.reclaim_expired(now);
        if !reclaimed.is_empty() {
            info!(room = %self.id, holds = reclaimed.len(), "Reclaimed expired holds");
        }

        match action {
            InventoryAction::Hold { seats, ttl } => {
                let hold = self.hold(seats, ttl, now)?;
                debug!(room = %self.id, hold = %hold.hold_id, seats = ?hold.seats, "Held");
                Ok(InventoryActionResult::Held(hold))
            }
            InventoryAction::Confirm { hold } => {
                let seats = self.confirm(hold)?;
                Ok(InventoryActionResult::Confirmed(seats))
            }
            InventoryAction::Release { hold } => {
                let seats = self.release(hold);
                if seats.is_empty() {
                    debug!(room = %self.id, %hold, "Release of unknown hold ignored");
                }
                Ok(InventoryActionResult::Released(seats))
            }
            InventoryAction::Snapshot => Ok(InventoryActionResult::Snapshot(self.snapshot())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SeatId, SeatStatus};
    use std::time::Duration;

    fn room() -> Room {
        Room::from_create_params(RoomCreate::numbered("sala-1", 2)).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_hold_reclaimed_by_next_action() {
        let mut room = room();
        let hold = InventoryAction::Hold {
            seats: vec![SeatId::from("A1")],
            ttl: Duration::from_secs(1),
        };
        room.handle_action(hold, &()).await.unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;

        let retry = InventoryAction::Hold {
            seats: vec![SeatId::from("A1")],
            ttl: Duration::from_secs(1),
        };
        let result = room.handle_action(retry, &()).await.unwrap();
        assert!(matches!(result, InventoryActionResult::Held(_)));
        assert_eq!(room.active_holds(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_after_expiry_fails() {
        let mut room = room();
        let held = room
            .handle_action(
                InventoryAction::Hold {
                    seats: vec![SeatId::from("A2")],
                    ttl: Duration::from_secs(1),
                },
                &(),
            )
            .await
            .unwrap();
        let InventoryActionResult::Held(hold) = held else {
            panic!("expected Held");
        };

        tokio::time::advance(Duration::from_secs(1)).await;

        let err = room
            .handle_action(InventoryAction::Confirm { hold: hold.hold_id }, &())
            .await
            .unwrap_err();
        assert_eq!(err, InventoryError::HoldNotFound(hold.hold_id));
        assert_eq!(room.status_of(&SeatId::from("A2")), Some(SeatStatus::Free));
    }
}
