//! Domain clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient)s.

pub mod inventory_client;
pub mod reservation_client;

pub use inventory_client::SeatInventoryClient;
pub use reservation_client::{Cancellation, ReservationClient};
