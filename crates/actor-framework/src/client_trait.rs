//! # ActorClient Trait
//!
//! Shared plumbing for resource-specific clients: `get` and `list` with the
//! framework error mapped into the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Screen { id: u32 }
/// #[derive(Debug)] struct ScreenCreate { id: u32 }
/// #[derive(Debug)] enum ScreenAction {}
/// #[derive(Debug, thiserror::Error)]
/// enum ScreenError { #[error("channel: {0}")] Channel(String) }
///
/// #[async_trait]
/// impl ActorEntity for Screen {
///     type Id = u32; type Create = ScreenCreate; type Action = ScreenAction;
///     type ActionResult = (); type Context = (); type Error = ScreenError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(p: ScreenCreate) -> Result<Self, Self::Error> { Ok(Self { id: p.id }) }
///     async fn handle_action(&mut self, _: ScreenAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct ScreenClient { inner: ResourceClient<Screen> }
///
/// #[async_trait]
/// impl ActorClient<Screen> for ScreenClient {
///     type Error = ScreenError;
///     fn inner(&self) -> &ResourceClient<Screen> { &self.inner }
///     fn map_error(e: FrameworkError) -> ScreenError { ScreenError::Channel(e.to_string()) }
/// }
///
/// async fn usage(client: ScreenClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity held by the actor.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
