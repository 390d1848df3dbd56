use super::{NotificationError, ReservationObserver};
use crate::model::{Reservation, ReservationState};
use async_trait::async_trait;
use tracing::info;

/// Default observer: tells the customer about each change by email.
///
/// Delivery is a structured log line; there is no mail transport.
#[derive(Debug, Clone, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }

    fn subject(reservation: &Reservation) -> String {
        let title = &reservation.showing.movie.title;
        match reservation.state() {
            ReservationState::Pending => format!("Reservation for {title} received"),
            ReservationState::Confirmed => format!("Your seats for {title} are confirmed"),
            ReservationState::Cancelled => format!("Your reservation for {title} was cancelled"),
        }
    }
}

#[async_trait]
impl ReservationObserver for EmailNotifier {
    fn name(&self) -> &str {
        "email"
    }

    async fn on_reservation_changed(&self, reservation: &Reservation) -> Result<(), NotificationError> {
        info!(
            to = %reservation.customer.email,
            reservation = %reservation.id,
            state = %reservation.state(),
            seats = reservation.seats.len(),
            subject = %Self::subject(reservation),
            "Email sent"
        );
        Ok(())
    }
}
