//! # Reservation Notifications
//!
//! Every [`Reservation`] owns a [`NotificationHub`]: an ordered list of
//! observers told about each state transition. The email notifier is
//! registered by [`Reservation::new`]; callers may append more through the
//! engine or the reservation client.
//!
//! Observers run in the caller's task once the transition is recorded, never
//! inside an actor, so they may call back into the engine. An observer that
//! fails is logged and skipped. It never stops the remaining observers and
//! never undoes the transition.

pub mod email;
pub mod fixtures;

pub use email::EmailNotifier;

use crate::model::Reservation;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Failure reported by an observer. Logged, never propagated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{observer} failed: {reason}")]
pub struct NotificationError {
    pub observer: String,
    pub reason: String,
}

/// Receives a reservation after each state change.
#[async_trait]
pub trait ReservationObserver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "observer"
    }

    async fn on_reservation_changed(&self, reservation: &Reservation) -> Result<(), NotificationError>;
}

/// Ordered fan-out to a reservation's observers.
#[derive(Clone, Default)]
pub struct NotificationHub {
    observers: Vec<Arc<dyn ReservationObserver>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Arc<dyn ReservationObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer once, in registration order.
    pub async fn notify(&self, reservation: &Reservation) {
        for observer in &self.observers {
            if let Err(e) = observer.on_reservation_changed(reservation).await {
                warn!(
                    reservation = %reservation.id,
                    observer = observer.name(),
                    error = %e,
                    "Observer failed"
                );
            }
        }
    }
}
