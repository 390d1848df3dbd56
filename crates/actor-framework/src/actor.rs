//! # Generic Actor Server
//!
//! `ResourceActor` owns the store of entities for one resource type and processes
//! requests sequentially. That sequential loop is the concurrency guarantee: an
//! action observes and mutates its entity with no other request interleaved.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor runs in its own Tokio task and
/// handles one message at a time, so the store needs no `Mutex`: two requests
/// against the same entity can never interleave.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Screen { id: String, open: bool }
/// #[derive(Debug)] struct ScreenCreate { id: String }
/// #[derive(Debug)] enum ScreenAction { Close }
/// #[derive(Debug, thiserror::Error)] #[error("screen error")] struct ScreenError;
///
/// #[async_trait]
/// impl ActorEntity for Screen {
///     type Id = String;
///     type Create = ScreenCreate;
///     type Action = ScreenAction;
///     type ActionResult = bool;
///     type Context = ();
///     type Error = ScreenError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(params: ScreenCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id: params.id, open: true })
///     }
///     async fn handle_action(&mut self, action: ScreenAction, _: &()) -> Result<bool, Self::Error> {
///         match action {
///             ScreenAction::Close => Ok(std::mem::replace(&mut self.open, false)),
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Screen>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(ScreenCreate { id: "screen-1".into() }).await.unwrap();
///     assert!(client.perform_action(id.clone(), ScreenAction::Close).await.unwrap());
///     assert!(!client.get(id).await.unwrap().unwrap().open);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is handed to every [`ActorEntity::handle_action`] call.
    pub async fn run(mut self, context: T::Context) {
        // "Room" instead of "cinema_booking::model::room::Room"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(item) => {
                            let id = item.id().clone();
                            if self.store.contains_key(&id) {
                                warn!(entity_type, %id, "Already exists");
                                let _ = respond_to
                                    .send(Err(FrameworkError::AlreadyExists(id.to_string())));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
