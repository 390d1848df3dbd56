//! # Seat Inventory Client
//!
//! High-level API for the inventory actor. Wraps a `ResourceClient<Room>` and
//! turns framework errors back into [`InventoryError`].

use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError, SeatSnapshot};
use crate::model::{Room, RoomCreate, RoomId, SeatHold, SeatId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct SeatInventoryClient {
    inner: ResourceClient<Room>,
}

impl SeatInventoryClient {
    pub fn new(inner: ResourceClient<Room>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Room> for SeatInventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<Room> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<InventoryError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(room)) => InventoryError::RoomNotFound(room),
            Err(FrameworkError::AlreadyExists(room)) => {
                InventoryError::InvalidLayout(format!("room {room} already exists"))
            }
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected response: {result:?}"))
}

impl SeatInventoryClient {
    #[instrument(skip(self, params), fields(room = %params.id, seats = params.seats.len()))]
    pub async fn create_room(&self, params: RoomCreate) -> Result<RoomId, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Atomically claims `seats` in `room` for `ttl`.
    #[instrument(skip(self, seats), fields(seats = seats.len()))]
    pub async fn hold(
        &self,
        room: &RoomId,
        seats: Vec<SeatId>,
        ttl: Duration,
    ) -> Result<SeatHold, InventoryError> {
        debug!(?seats, "Holding seats");
        match self
            .inner
            .perform_action(room.clone(), InventoryAction::Hold { seats, ttl })
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Held(hold) => Ok(hold),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, hold), fields(room = %hold.room, hold = %hold.hold_id))]
    pub async fn confirm(&self, hold: &SeatHold) -> Result<Vec<SeatId>, InventoryError> {
        debug!("Confirming hold");
        match self
            .inner
            .perform_action(hold.room.clone(), InventoryAction::Confirm { hold: hold.hold_id })
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Confirmed(seats) => Ok(seats),
            other => Err(unexpected(other)),
        }
    }

    /// Frees the hold's seats. Returns the seats actually freed.
    #[instrument(skip(self, hold), fields(room = %hold.room, hold = %hold.hold_id))]
    pub async fn release(&self, hold: &SeatHold) -> Result<Vec<SeatId>, InventoryError> {
        debug!("Releasing hold");
        match self
            .inner
            .perform_action(hold.room.clone(), InventoryAction::Release { hold: hold.hold_id })
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Released(seats) => Ok(seats),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self, room: &RoomId) -> Result<Vec<SeatSnapshot>, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(room.clone(), InventoryAction::Snapshot)
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Snapshot(seats) => Ok(seats),
            other => Err(unexpected(other)),
        }
    }
}
