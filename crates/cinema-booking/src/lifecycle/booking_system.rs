use crate::clients::{ReservationClient, SeatInventoryClient};
use crate::config::BookingConfig;
use crate::engine::ReservationEngine;
use crate::{inventory_actor, reservation_actor};
use tracing::{error, info};

/// Owns the booking actors and the engine built on them.
///
/// # Example
///
/// ```rust
/// use cinema_booking::config::BookingConfig;
/// use cinema_booking::lifecycle::BookingSystem;
/// use cinema_booking::model::RoomCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = BookingSystem::new(BookingConfig::default());
///     system.inventory.create_room(RoomCreate::numbered("sala-1", 10)).await?;
///     // ... book through system.engine ...
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct BookingSystem {
    pub engine: ReservationEngine,
    pub inventory: SeatInventoryClient,
    pub reservations: ReservationClient,
    /// Ledger first, inventory last: the ledger holds an inventory client.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BookingSystem {
    /// Spawns both actors. Must be called inside a Tokio runtime.
    pub fn new(config: BookingConfig) -> Self {
        let buffer = config.channel_buffer.max(1);

        let (inventory_actor, inventory) = inventory_actor::new(buffer);
        let (reservation_actor, reservations) = reservation_actor::new(buffer);
        let inventory = SeatInventoryClient::new(inventory);
        let reservations = ReservationClient::new(reservations);

        let inventory_handle = tokio::spawn(inventory_actor.run(()));
        let reservation_handle = tokio::spawn(reservation_actor.run(inventory.clone()));

        let engine = ReservationEngine::new(inventory.clone(), reservations.clone(), config);
        info!("Booking system started");

        Self {
            engine,
            inventory,
            reservations,
            handles: vec![reservation_handle, inventory_handle],
        }
    }

    /// Drops the clients and waits for both actors to stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down booking system...");
        drop(self.engine);
        drop(self.reservations);
        drop(self.inventory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Booking system shutdown complete.");
        Ok(())
    }
}
