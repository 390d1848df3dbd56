//! # Cinema Booking Demo
//!
//! Walks one customer through the booking flow on a 50-seat room:
//! 1. Book A1 and A2 by card.
//! 2. Try A2 again (taken) and A3 with a card that fails its checksum.
//! 3. Cancel the first booking and show the seats are free again.
//!
//! Configuration comes from `BOOKING_*` variables or `.env`; log verbosity from `RUST_LOG`.

use actor_framework::tracing::setup_tracing;
use chrono::{Duration, Utc};
use cinema_booking::config::BookingConfig;
use cinema_booking::engine::ReservationRequest;
use cinema_booking::lifecycle::BookingSystem;
use cinema_booking::model::{Customer, Movie, RoomCreate, SeatStatus, Showing};
use cinema_booking::payment::{CardPayment, PayPalPayment};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = BookingConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting cinema booking demo");

    let system = BookingSystem::new(config);

    let room = system
        .inventory
        .create_room(RoomCreate::numbered("sala-1", 50))
        .await
        .map_err(|e| e.to_string())?;

    let movie = Movie::new("Inception", "Sci-Fi", 148).map_err(|e| e.to_string())?;
    let showing =
        Showing::new(movie, Utc::now() + Duration::days(1), room.clone()).map_err(|e| e.to_string())?;
    let customer = Customer::new("Juan Pérez", "juan@email.com").map_err(|e| e.to_string())?;
    info!(customer = %customer.name, movie = %showing.movie.title, at = %showing.scheduled_at, "Showing available");

    let span = tracing::info_span!("booking");
    let booked = async {
        let request = ReservationRequest::new(customer.clone(), showing.clone(), ["A1", "A2"]);
        system
            .engine
            .create(request, &CardPayment::new("4111 1111 1111 1111"))
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(reservation = %booked.id, amount = %booked.amount, "Reservation completed");

    let taken = ReservationRequest::new(customer.clone(), showing.clone(), ["A2"]);
    match system
        .engine
        .create(taken, &PayPalPayment::new("juan@email.com"))
        .await
    {
        Ok(r) => error!(reservation = %r.id, "A2 was booked twice"),
        Err(e) => info!(error = %e, "Second booking of A2 refused"),
    }

    let bad_card = ReservationRequest::new(customer.clone(), showing.clone(), ["A3"]);
    if let Err(e) = system
        .engine
        .create(bad_card, &CardPayment::new("1234-5678-9012-3456"))
        .await
    {
        info!(error = %e, "Booking with invalid card refused");
    }

    let cancelled = system
        .engine
        .cancel(booked.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(reservation = %cancelled.id, state = %cancelled.state(), "Reservation cancelled");

    let snapshot = system.engine.snapshot(&room).await.map_err(|e| e.to_string())?;
    let free = snapshot.iter().filter(|s| s.status == SeatStatus::Free).count();
    info!(room = %room, free, capacity = snapshot.len(), "Room state");

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
