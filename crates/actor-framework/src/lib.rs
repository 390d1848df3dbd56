//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. Each resource type
//! (a room's seat inventory, the reservation ledger) is owned by one actor task
//! that processes messages sequentially, and callers talk to it through a cheap,
//! cloneable client.
//!
//! ## Why actors for bookings?
//!
//! - Isolated state: no shared memory, no locks held across `.await`
//! - One message at a time per actor: a multi-seat hold is checked and applied
//!   with no other request interleaved, so two customers can never both win a seat
//! - Coordination by message: a reservation releases its seats by sending an
//!   action to the inventory actor, not by reaching into its state
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain state and the actions it accepts
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! ## Request Set
//!
//! | Request | Result | Failure |
//! |---|---|---|
//! | `Create` | the entity's own id | [`FrameworkError::AlreadyExists`], entity validation error |
//! | `Get` | `Option<T>` | - |
//! | `List` | `Vec<T>` | - |
//! | `Action` | `T::ActionResult` | [`FrameworkError::NotFound`], entity error |
//!
//! Entities are never updated or deleted wholesale. Every state change is an
//! explicit action, which keeps invariants in one place: `handle_action`.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Seat { id: String, taken: bool }
//!
//! #[derive(Debug)] struct SeatCreate { id: String }
//! #[derive(Debug)] enum SeatAction { Take }
//! #[derive(Debug, thiserror::Error)] #[error("seat {0} is taken")] struct SeatTaken(String);
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = String;
//!     type Create = SeatCreate;
//!     type Action = SeatAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = SeatTaken;
//!
//!     fn id(&self) -> &String { &self.id }
//!
//!     fn from_create_params(params: SeatCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id: params.id, taken: false })
//!     }
//!
//!     async fn handle_action(&mut self, action: SeatAction, _: &()) -> Result<(), Self::Error> {
//!         match action {
//!             SeatAction::Take if self.taken => Err(SeatTaken(self.id.clone())),
//!             SeatAction::Take => { self.taken = true; Ok(()) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Seat>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(SeatCreate { id: "A1".into() }).await.unwrap();
//!     client.perform_action(id.clone(), SeatAction::Take).await.unwrap();
//!
//!     let second = client.perform_action(id, SeatAction::Take).await.unwrap_err();
//!     let typed = second.into_entity_error::<SeatTaken>().unwrap();
//!     assert_eq!(typed.to_string(), "seat A1 is taken");
//!
//!     let dup = client.create(SeatCreate { id: "A1".into() }).await;
//!     assert!(matches!(dup, Err(FrameworkError::AlreadyExists(_))));
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations so the code
//! built on top of a client can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
