//! # Reservation Client
//!
//! High-level API for the reservation ledger actor.

use crate::model::{CustomerId, Reservation, ReservationId};
use crate::notification::ReservationObserver;
use crate::reservation_actor::{ReservationAction, ReservationActionResult, ReservationError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ReservationClient {
    inner: ResourceClient<Reservation>,
}

impl ReservationClient {
    pub fn new(inner: ResourceClient<Reservation>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Reservation> for ReservationClient {
    type Error = ReservationError;

    fn inner(&self) -> &ResourceClient<Reservation> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ReservationError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => ReservationError::NotFound(id),
            Err(other) => ReservationError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Outcome of [`ReservationClient::cancel`].
#[derive(Debug, Clone)]
pub enum Cancellation {
    /// This call cancelled it. Its observers still need to hear about it.
    Cancelled(Reservation),
    AlreadyCancelled(Reservation),
}

fn unexpected(result: ReservationActionResult) -> ReservationError {
    ReservationError::ActorCommunicationError(format!("unexpected response: {result:?}"))
}

impl ReservationClient {
    /// Records a confirmed reservation in the ledger.
    #[instrument(skip(self, reservation), fields(reservation = %reservation.id))]
    pub async fn record(&self, reservation: Reservation) -> Result<ReservationId, ReservationError> {
        debug!("Sending request");
        self.inner.create(reservation).await.map_err(Self::map_error)
    }

    /// Cancels a recorded reservation. Cancelling twice is not an error.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ReservationId) -> Result<Cancellation, ReservationError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ReservationAction::Cancel)
            .await
            .map_err(Self::map_error)?
        {
            ReservationActionResult::Cancelled(reservation) => {
                Ok(Cancellation::Cancelled(reservation))
            }
            ReservationActionResult::AlreadyCancelled(reservation) => {
                debug!("Already cancelled");
                Ok(Cancellation::AlreadyCancelled(reservation))
            }
            other => Err(unexpected(other)),
        }
    }

    /// Returns the number of observers registered after this one.
    #[instrument(skip(self, observer), fields(observer = observer.name()))]
    pub async fn register_observer(
        &self,
        id: ReservationId,
        observer: Arc<dyn ReservationObserver>,
    ) -> Result<usize, ReservationError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ReservationAction::RegisterObserver(observer))
            .await
            .map_err(Self::map_error)?
        {
            ReservationActionResult::ObserverRegistered(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    /// A customer's reservations, oldest first.
    #[instrument(skip(self))]
    pub async fn list_for_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Reservation>, ReservationError> {
        let mut reservations: Vec<Reservation> = self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.customer.id == customer)
            .collect();
        reservations.sort_by_key(|r| r.created_at);
        Ok(reservations)
    }
}
