//! # Generic Messages
//!
//! The requests a [`ResourceClient`](crate::ResourceClient) sends to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every resource type gets the same small vocabulary:
///
/// - **Create**: registers a new entity built from [`ActorEntity::Create`]. The
///   entity names its own id, and a second entity with the same id is rejected.
/// - **Get**: returns a clone of the entity, or `None`.
/// - **List**: returns clones of every entity the actor holds.
/// - **Action**: runs an [`ActorEntity::Action`] against one entity with exclusive
///   access. This is where resource-specific behaviour lives (holding seats,
///   cancelling a reservation).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
