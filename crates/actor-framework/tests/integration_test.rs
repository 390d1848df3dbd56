use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Screen {
    id: u32,
    name: String,
    showing: Option<String>,
}

#[derive(Debug)]
struct ScreenCreate {
    id: u32,
    name: String,
}

#[derive(Debug)]
enum ScreenAction {
    Schedule(String),
    Clear,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ScreenError {
    #[error("screen name must not be empty")]
    EmptyName,
    #[error("screen already shows {0}")]
    Busy(String),
}

#[async_trait]
impl ActorEntity for Screen {
    type Id = u32;
    type Create = ScreenCreate;
    type Action = ScreenAction;
    type ActionResult = bool;
    type Context = ();
    type Error = ScreenError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(params: ScreenCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ScreenError::EmptyName);
        }
        Ok(Self {
            id: params.id,
            name: params.name,
            showing: None,
        })
    }

    async fn handle_action(
        &mut self,
        action: ScreenAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            ScreenAction::Schedule(movie) => match &self.showing {
                Some(current) => Err(ScreenError::Busy(current.clone())),
                None => {
                    self.showing = Some(movie);
                    Ok(true)
                }
            },
            ScreenAction::Clear => Ok(self.showing.take().is_some()),
        }
    }
}

fn create(id: u32, name: &str) -> ScreenCreate {
    ScreenCreate {
        id,
        name: name.into(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create: the entity names its own id
    let id: u32 = client.create(create(7, "Sala 7")).await.unwrap();
    assert_eq!(id, 7);

    // 2. Action
    let scheduled: bool = client
        .perform_action(id, ScreenAction::Schedule("Matrix".into()))
        .await
        .unwrap();
    assert!(scheduled);

    let screen: Screen = client.get(id).await.unwrap().unwrap();
    assert_eq!(screen.showing.as_deref(), Some("Matrix"));

    // 3. Action rejected by the entity, state untouched
    let err = client
        .perform_action(id, ScreenAction::Schedule("Alien".into()))
        .await
        .unwrap_err();
    assert_eq!(
        err.into_entity_error::<ScreenError>().unwrap(),
        ScreenError::Busy("Matrix".into())
    );

    // 4. Clear
    assert!(client.perform_action(id, ScreenAction::Clear).await.unwrap());
    assert!(!client.perform_action(id, ScreenAction::Clear).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() {
    let (actor, client) = ResourceActor::<Screen>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create(1, "Sala 1")).await.unwrap();
    let dup = client.create(create(1, "Other")).await;
    assert!(matches!(dup, Err(FrameworkError::AlreadyExists(id)) if id == "1"));

    // Original entity survives
    let screen = client.get(1).await.unwrap().unwrap();
    assert_eq!(screen.name, "Sala 1");
}

#[tokio::test]
async fn test_create_validation_error_is_typed() {
    let (actor, client) = ResourceActor::<Screen>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(create(1, "  ")).await.unwrap_err();
    assert_eq!(
        err.into_entity_error::<ScreenError>().unwrap(),
        ScreenError::EmptyName
    );
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_and_missing_entities() {
    let (actor, client) = ResourceActor::<Screen>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create(1, "Sala 1")).await.unwrap();
    client.create(create(2, "Sala 2")).await.unwrap();

    let mut names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Sala 1", "Sala 2"]);

    assert!(client.get(99).await.unwrap().is_none());
    let err = client
        .perform_action(99, ScreenAction::Clear)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "99"));
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = ResourceActor::<Screen>::new(32);
    tokio::spawn(actor.run(()));
    client.create(create(1, "Sala 1")).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .perform_action(1, ScreenAction::Schedule(format!("Movie {i}")))
                .await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Screen>::new(1);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
