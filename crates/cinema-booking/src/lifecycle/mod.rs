//! # System Lifecycle
//!
//! Starting, wiring and stopping the booking actors.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! // 1. Create actors (no dependencies yet)
//! let (inventory_actor, inventory) = inventory_actor::new(buffer);
//! let (reservation_actor, reservations) = reservation_actor::new(buffer);
//!
//! // 2. Start them; the ledger gets the inventory client as its context
//! tokio::spawn(inventory_actor.run(()));
//! tokio::spawn(reservation_actor.run(inventory.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. Drop every client (the system's own and the engine's).
//! 2. The ledger actor sees its channel close and exits, dropping its
//!    inventory client.
//! 3. The inventory actor's channel closes and it exits too.
//!
//! Handles are awaited in that order. Clones of the engine held elsewhere keep
//! the actors alive until they are dropped.

pub mod booking_system;

pub use booking_system::*;
