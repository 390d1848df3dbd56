//! Domain types for the booking core.
//!
//! Rooms and reservations are managed by actors (see [`crate::inventory_actor`] and
//! [`crate::reservation_actor`]). The rest are plain values.

pub mod customer;
pub mod hold;
pub mod money;
pub mod reservation;
pub mod room;
pub mod seat;
pub mod showing;

pub use customer::*;
pub use hold::*;
pub use money::*;
pub use reservation::*;
pub use room::*;
pub use seat::*;
pub use showing::*;

/// Rejected input to one of the model constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Movie title must not be empty")]
    EmptyTitle,
    #[error("Movie duration must be positive")]
    InvalidDuration,
    #[error("Showing must be bound to a room")]
    MissingRoom,
}
