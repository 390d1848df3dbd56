//! Observers for tests and demos.

use super::{NotificationError, ReservationObserver};
use crate::model::{Reservation, ReservationId, ReservationState};
use async_trait::async_trait;
use std::sync::Mutex;

/// Remembers every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<(ReservationId, ReservationState)>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<(ReservationId, ReservationState)> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    pub fn states(&self) -> Vec<ReservationState> {
        self.events().into_iter().map(|(_, state)| state).collect()
    }
}

#[async_trait]
impl ReservationObserver for RecordingObserver {
    fn name(&self) -> &str {
        "recording"
    }

    async fn on_reservation_changed(&self, reservation: &Reservation) -> Result<(), NotificationError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((reservation.id, reservation.state()));
        }
        Ok(())
    }
}

/// Fails every notification.
#[derive(Debug, Default)]
pub struct FailingObserver;

#[async_trait]
impl ReservationObserver for FailingObserver {
    fn name(&self) -> &str {
        "failing"
    }

    async fn on_reservation_changed(&self, _: &Reservation) -> Result<(), NotificationError> {
        Err(NotificationError {
            observer: self.name().to_string(),
            reason: "mailbox unavailable".to_string(),
        })
    }
}
