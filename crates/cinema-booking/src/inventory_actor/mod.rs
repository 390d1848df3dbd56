//! # Seat Inventory Actor
//!
//! One actor owns every [`Room`] and is the only authority over seat status.
//! It processes one message at a time, so the check-then-claim of a multi-seat
//! hold cannot interleave with any other hold, confirm or release.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Room`]
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Holds
//!
//! | Action | Effect | Failure |
//! |---|---|---|
//! | `Hold` | all requested seats `Free -> Held`, or none | `InvalidSelection`, `UnknownSeats`, `SeatsUnavailable` |
//! | `Confirm` | the hold's seats `Held -> Occupied` | `HoldNotFound` |
//! | `Release` | the hold's seats back to `Free` | never; unknown holds free nothing |
//! | `Snapshot` | read-only view in seat order | never |
//!
//! Before any of these runs, unconfirmed holds past their deadline are
//! reclaimed.
//!
//! ## Usage
//!
//! ```rust
//! use cinema_booking::clients::SeatInventoryClient;
//! use cinema_booking::inventory_actor;
//! use cinema_booking::model::{RoomCreate, SeatId, SeatStatus};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = inventory_actor::new(32);
//!     let client = SeatInventoryClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let room = client.create_room(RoomCreate::numbered("sala-1", 4)).await?;
//!     let hold = client
//!         .hold(&room, vec![SeatId::from("A1"), SeatId::from("A2")], Duration::from_secs(30))
//!         .await?;
//!     client.confirm(&hold).await?;
//!
//!     let snapshot = client.snapshot(&room).await?;
//!     assert_eq!(snapshot[0].status, SeatStatus::Occupied);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Room;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the inventory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Room>, ResourceClient<Room>) {
    ResourceActor::new(buffer_size)
}
