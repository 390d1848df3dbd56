//! # Reservation Ledger Actor
//!
//! Holds every recorded reservation. The engine records a reservation once it
//! is confirmed; from then on it changes only through this actor's actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Reservation`]
//! - [`error`] - [`ReservationError`], the error type callers of the engine see
//! - [`actions`] - [`ReservationAction`] and [`ReservationActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context Injection
//!
//! Cancelling must free seats, so the actor runs with a
//! [`SeatInventoryClient`](crate::clients::SeatInventoryClient) as its context:
//!
//! ```rust,ignore
//! impl ActorEntity for Reservation {
//!     type Context = SeatInventoryClient;
//! }
//!
//! tokio::spawn(reservation_actor.run(inventory_client.clone()));
//! ```
//!
//! The dependency is one-way (the inventory knows nothing about reservations),
//! so dropping the clients shuts both actors down in order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Reservation;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the reservation actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Reservation>, ResourceClient<Reservation>) {
    ResourceActor::new(buffer_size)
}
