//! # ActorEntity Trait
//!
//! The contract a resource (a room's seat inventory, a reservation, ...) implements
//! to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types keep every request strongly typed: a room inventory only
//! accepts room actions, a reservation only accepts reservation actions. The
//! compiler rejects the rest.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Identity
/// Entities carry their own identifier ([`ActorEntity::id`]). Rooms are named by
/// the venue and reservations mint a UUID before they are recorded, so the actor
/// never has to invent ids.
///
/// # Async & Context
/// [`ActorEntity::handle_action`] is async and receives the runtime `Context`
/// given to [`ResourceActor::run`](crate::ResourceActor::run). This "late binding"
/// lets one actor call another (a reservation releasing its seats through the
/// inventory client) without wiring clients at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `Hold`, `Cancel`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per action. Clients deal with a
    /// single type and match on the variants they care about.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier under which the actor stores this entity.
    fn id(&self) -> &Self::Id;

    /// Validate the payload and construct the entity.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle a custom resource-specific action.
    ///
    /// The actor processes one message at a time, so the body runs with exclusive
    /// access to `self`. Keep it short: every other request for this actor waits.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
