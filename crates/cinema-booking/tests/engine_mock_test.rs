//! Engine failure paths against scripted actors.

use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use chrono::Utc;
use cinema_booking::clients::{ReservationClient, SeatInventoryClient};
use cinema_booking::config::BookingConfig;
use cinema_booking::engine::{ReservationEngine, ReservationRequest};
use cinema_booking::inventory_actor::{InventoryActionResult, InventoryError};
use cinema_booking::model::{
    Customer, HoldId, Movie, Reservation, Room, RoomId, SeatHold, SeatId, Showing,
};
use cinema_booking::notification::fixtures::RecordingObserver;
use cinema_booking::payment::fixtures::{ApprovingGateway, DecliningGateway};
use cinema_booking::reservation_actor::ReservationError;
use std::sync::Arc;
use tokio::time::Instant;

struct Harness {
    inventory: MockClient<Room>,
    reservations: MockClient<Reservation>,
    engine: ReservationEngine,
}

fn harness() -> Harness {
    let inventory = MockClient::<Room>::new();
    let reservations = MockClient::<Reservation>::new();
    let engine = ReservationEngine::new(
        SeatInventoryClient::new(inventory.client()),
        ReservationClient::new(reservations.client()),
        BookingConfig::default(),
    );
    Harness {
        inventory,
        reservations,
        engine,
    }
}

fn request() -> ReservationRequest {
    let customer = Customer::new("Ana", "ana@example.com").unwrap();
    let movie = Movie::new("Inception", "Sci-Fi", 148).unwrap();
    let showing = Showing::new(movie, Utc::now(), RoomId::from("sala-1")).unwrap();
    ReservationRequest::new(customer, showing, ["A1"])
}

fn hold() -> SeatHold {
    SeatHold {
        hold_id: HoldId::new(),
        room: RoomId::from("sala-1"),
        seats: vec![SeatId::from("A1")],
        expires_at: Instant::now(),
    }
}

fn kinds(received: &[String]) -> Vec<&str> {
    received
        .iter()
        .map(|r| r.split(' ').nth(2).unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn test_decline_releases_and_never_confirms() {
    let mut h = harness();
    let room = RoomId::from("sala-1");
    h.inventory
        .expect_action(room.clone())
        .return_ok(InventoryActionResult::Held(hold()));
    h.inventory
        .expect_action(room)
        .return_ok(InventoryActionResult::Released(vec![SeatId::from("A1")]));

    let gateway = DecliningGateway::default();
    let err = h.engine.create(request(), &gateway).await.unwrap_err();

    assert!(matches!(err, ReservationError::PaymentDeclined { .. }));
    assert_eq!(gateway.calls(), 1);
    assert_eq!(kinds(&h.inventory.received()), vec!["Hold", "Release"]);
    assert!(h.reservations.received().is_empty());
    h.inventory.verify();
}

#[tokio::test]
async fn test_lapsed_hold_after_payment_is_released() {
    let mut h = harness();
    let room = RoomId::from("sala-1");
    let held = hold();
    h.inventory
        .expect_action(room.clone())
        .return_ok(InventoryActionResult::Held(held.clone()));
    h.inventory
        .expect_action(room.clone())
        .return_err(FrameworkError::EntityError(Box::new(
            InventoryError::HoldNotFound(held.hold_id),
        )));
    h.inventory
        .expect_action(room)
        .return_ok(InventoryActionResult::Released(Vec::new()));

    let err = h
        .engine
        .create(request(), &ApprovingGateway::default())
        .await
        .unwrap_err();

    assert_eq!(err, ReservationError::SeatHoldExpired);
    assert_eq!(kinds(&h.inventory.received()), vec!["Hold", "Confirm", "Release"]);
    assert!(h.reservations.received().is_empty());
    h.inventory.verify();
}

#[tokio::test]
async fn test_unavailable_seats_skip_payment() {
    let mut h = harness();
    h.inventory
        .expect_action(RoomId::from("sala-1"))
        .return_err(FrameworkError::EntityError(Box::new(
            InventoryError::SeatsUnavailable(vec![SeatId::from("A1")]),
        )));

    let gateway = ApprovingGateway::default();
    let err = h.engine.create(request(), &gateway).await.unwrap_err();

    assert_eq!(
        err,
        ReservationError::SeatUnavailable {
            seats: vec![SeatId::from("A1")]
        }
    );
    assert_eq!(gateway.calls(), 0);
    assert_eq!(kinds(&h.inventory.received()), vec!["Hold"]);
}

#[tokio::test]
async fn test_ledger_failure_releases_confirmed_seats() {
    let mut h = harness();
    let room = RoomId::from("sala-1");
    h.inventory
        .expect_action(room.clone())
        .return_ok(InventoryActionResult::Held(hold()));
    h.inventory
        .expect_action(room.clone())
        .return_ok(InventoryActionResult::Confirmed(vec![SeatId::from("A1")]));
    h.inventory
        .expect_action(room)
        .return_ok(InventoryActionResult::Released(vec![SeatId::from("A1")]));
    h.reservations
        .expect_create()
        .return_err(FrameworkError::ActorClosed);
    let observer = Arc::new(RecordingObserver::default());

    let err = h
        .engine
        .create(request().with_observer(observer.clone()), &ApprovingGateway::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ReservationError::ActorCommunicationError(_)));
    assert_eq!(kinds(&h.inventory.received()), vec!["Hold", "Confirm", "Release"]);
    assert!(observer.events().is_empty(), "unrecorded booking was announced");
    h.inventory.verify();
    h.reservations.verify();
}
