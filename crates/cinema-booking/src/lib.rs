//! # Cinema Booking
//!
//! Seat booking for movie showings, built on the actor framework.
//!
//! - [`model`]: rooms, seats, showings, customers, reservations
//! - [`inventory_actor`]: the single authority over seat status
//! - [`reservation_actor`]: the ledger of recorded reservations
//! - [`payment`]: the [`PaymentStrategy`](payment::PaymentStrategy) trait and its variants
//! - [`notification`]: per-reservation observers
//! - [`engine`]: [`ReservationEngine`](engine::ReservationEngine), create and cancel
//! - [`lifecycle`]: [`BookingSystem`](lifecycle::BookingSystem), wiring and shutdown
//! - [`config`]: [`BookingConfig`](config::BookingConfig)

pub mod clients;
pub mod config;
pub mod engine;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod notification;
pub mod payment;
pub mod reservation_actor;
