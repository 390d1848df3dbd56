//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a running actor. Use it to test
//! orchestration code (the reservation engine, domain clients) while simulating
//! outcomes that are awkward to provoke with real actors: a seat that is already
//! taken, an actor that has shut down, a hold that expired.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | None (expectations) | Real state management |
//! | **Use case** | Logic *around* the client | The actor itself, or the full system |
//! | **Error injection** | `return_err` | Requires arranging real state |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Screen { id: u32 }
//! #[derive(Debug)] struct ScreenCreate;
//! #[derive(Debug)] enum ScreenAction { Dim }
//! #[derive(Debug, thiserror::Error)] #[error("screen error")] struct ScreenError;
//!
//! #[async_trait]
//! impl ActorEntity for Screen {
//!     type Id = u32; type Create = ScreenCreate; type Action = ScreenAction;
//!     type ActionResult = (); type Context = (); type Error = ScreenError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(_: ScreenCreate) -> Result<Self, Self::Error> { Ok(Self { id: 1 }) }
//!     async fn handle_action(&mut self, _: ScreenAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Screen>::new();
//!     mock.expect_action(7).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().perform_action(7, ScreenAction::Dim).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     assert_eq!(mock.received(), vec!["Action 7 Dim".to_string()]);
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control, [`create_mock_client`] returns the raw receiver and
//! the `expect_*` helpers pull one request off it, leaving the test to answer
//! through the responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind, wrong id, or none left) panics the mock task, which
/// the caller observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                received_clone.lock().unwrap_or_else(PoisonError::into_inner).push(describe(&request));
                let expectation = expectations_clone.lock().unwrap_or_else(PoisonError::into_inner).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "Get sent for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Action sent for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {}", describe(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Action { id, response })
    }

    /// Requests seen so far, in arrival order, rendered as `"<Kind> <id> <payload>"`.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap_or_else(PoisonError::into_inner);
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create {:?}", params),
        ResourceRequest::Get { id, .. } => format!("Get {}", id),
        ResourceRequest::List { .. } => "List".to_string(),
        ResourceRequest::Action { id, action, .. } => format!("Action {} {:?}", id, action),
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.expectations.lock().unwrap_or_else(PoisonError::into_inner).push_back((self.make)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap_or_else(PoisonError::into_inner).push_back((self.make)(Err(error)));
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers automatically: pull each request with one of the `expect_*`
/// helpers and reply through the returned responder. Useful when a test needs to
/// inspect the exact payload a domain client sends.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next message if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Hall {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct HallCreate {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    enum HallAction {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Hall error")]
    struct HallError;

    #[async_trait]
    impl ActorEntity for Hall {
        type Id = u32;
        type Create = HallCreate;
        type Action = HallAction;
        type ActionResult = ();
        type Context = ();
        type Error = HallError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(params: HallCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id: params.id,
                name: params.name,
            })
        }

        async fn handle_action(&mut self, _: HallAction, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_step_by_step_create() {
        let (client, mut receiver) = create_mock_client::<Hall>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(HallCreate {
                    id: 3,
                    name: "Sala 3".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Sala 3");
        responder.send(Ok(payload.id)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(3)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Hall>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Hall {
            id: 1,
            name: "Sala 1".to_string(),
        }));
        mock.expect_action(1).return_ok(());

        let client = mock.client();
        let id = client
            .create(HallCreate {
                id: 1,
                name: "Sala 1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Sala 1");

        client
            .perform_action(1, HallAction::Rename("Sala Uno".to_string()))
            .await
            .unwrap();

        assert_eq!(
            mock.received(),
            vec![
                "Create HallCreate { id: 1, name: \"Sala 1\" }".to_string(),
                "Get 1".to_string(),
                "Action 1 Rename(\"Sala Uno\")".to_string(),
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_surfaces_as_dropped_actor() {
        let mock = MockClient::<Hall>::new();
        let result = mock.client().list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
