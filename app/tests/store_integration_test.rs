//! Integration tests for the todo app against a mock backend
//!
//! Runs the production environment and the real store against a
//! `wiremock` server, covering the full command/response cycle: load,
//! add, toggle rollback, delete, and in-flight deduplication.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use serde_json::json;
use std::time::Duration;
use taskwire_api::{Todo, TodoApiClient, TodoId};
use taskwire_app::{
    LoadPhase, ProductionTodoEnvironment, TodoAppAction, TodoAppReducer, TodoAppState,
};
use taskwire_runtime::Store;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestStore = Store<
    TodoAppState,
    TodoAppAction,
    ProductionTodoEnvironment,
    TodoAppReducer<ProductionTodoEnvironment>,
>;

fn store_for(server: &MockServer) -> TestStore {
    Store::new(
        TodoAppState::new(),
        TodoAppReducer::new(),
        ProductionTodoEnvironment::new(TodoApiClient::new(server.uri())),
    )
}

fn seeded_store(server: &MockServer, todos: Vec<Todo>) -> TestStore {
    let mut state = TodoAppState::new();
    state.phase = LoadPhase::Ready;
    state.todos = todos;

    Store::new(
        state,
        TodoAppReducer::new(),
        ProductionTodoEnvironment::new(TodoApiClient::new(server.uri())),
    )
}

fn todo(id: i64, title: &str, completed: bool) -> Todo {
    Todo {
        id: TodoId::new(id),
        title: title.to_string(),
        description: String::new(),
        completed,
    }
}

#[tokio::test]
async fn test_load_populates_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "todos": [
                { "id": 1, "title": "Buy milk", "description": "", "completed": false },
                { "id": 2, "title": "Ship release", "description": "v1.2", "completed": true },
            ]
        })))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);

    let resolved = store
        .send_and_wait_for(
            TodoAppAction::Load,
            |a| {
                matches!(
                    a,
                    TodoAppAction::TodosLoaded { .. } | TodoAppAction::LoadFailed { .. }
                )
            },
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert!(matches!(resolved, TodoAppAction::TodosLoaded { .. }));

    let state = store.state(std::clone::Clone::clone).await;
    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.todos[0].title, "Buy milk");
    assert_eq!(state.todos[1].description, "v1.2");
    assert!(state.todos[1].completed);
}

#[tokio::test]
async fn test_load_failure_sets_failed_phase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "detail": "database unavailable" })),
        )
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);

    let mut handle = store.send(TodoAppAction::Load).await.unwrap();
    handle.wait().await;

    let state = store.state(std::clone::Clone::clone).await;
    assert_eq!(state.phase, LoadPhase::Failed);
    assert_eq!(
        state.banner_error.as_deref(),
        Some("Failed to load todos: database unavailable")
    );
}

#[tokio::test]
async fn test_add_round_trip_appends_and_resets_composer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({
            "title": "Buy milk",
            "description": "Semi-skimmed",
            "completed": false,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7, "title": "Buy milk", "description": "Semi-skimmed", "completed": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = seeded_store(&mock_server, vec![todo(1, "First", true)]);

    store
        .send(TodoAppAction::ComposerTitleChanged {
            title: "  Buy milk ".to_string(),
        })
        .await
        .unwrap();
    store
        .send(TodoAppAction::ComposerDescriptionChanged {
            description: "Semi-skimmed".to_string(),
        })
        .await
        .unwrap();

    let mut handle = store.send(TodoAppAction::ComposerSubmitted).await.unwrap();
    handle.wait().await;

    let state = store.state(std::clone::Clone::clone).await;
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.todos[1].id, TodoId::new(7));
    assert_eq!(state.todos[1].title, "Buy milk");
    assert!(state.composer.title.is_empty());
    assert!(state.composer.description.is_empty());
}

#[tokio::test]
async fn test_add_failure_keeps_drafts_and_flashes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "disk full" })),
        )
        .mount(&mock_server)
        .await;

    let store = seeded_store(&mock_server, vec![]);

    store
        .send(TodoAppAction::ComposerTitleChanged {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();

    let mut handle = store.send(TodoAppAction::ComposerSubmitted).await.unwrap();
    handle.wait().await;

    // The failure has been applied; its flash-clear delay is still pending.
    let state = store.state(std::clone::Clone::clone).await;
    assert!(state.todos.is_empty());
    assert_eq!(
        state.banner_error.as_deref(),
        Some("Failed to add todo: disk full")
    );
    assert_eq!(state.composer.title, "Buy milk");
    assert_eq!(state.composer.flash_error.as_deref(), Some("disk full"));

    // The flash clears itself; the banner stays until dismissed.
    tokio::time::sleep(Duration::from_millis(600)).await;
    let state = store.state(std::clone::Clone::clone).await;
    assert!(state.composer.flash_error.is_none());
    assert_eq!(
        state.banner_error.as_deref(),
        Some("Failed to add todo: disk full")
    );
}

#[tokio::test]
async fn test_toggle_failure_rolls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/todos/1/complete"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "database unavailable" })),
        )
        .mount(&mock_server)
        .await;

    let store = seeded_store(&mock_server, vec![todo(1, "Buy milk", false)]);

    let mut handle = store
        .send(TodoAppAction::ToggleRequested {
            id: TodoId::new(1),
            completed: true,
        })
        .await
        .unwrap();

    // The flip is visible before the server answers.
    assert!(store.state(|s| s.todos[0].completed).await);

    handle.wait().await;

    let state = store.state(std::clone::Clone::clone).await;
    assert!(!state.todos[0].completed);
    assert_eq!(
        state.banner_error.as_deref(),
        Some("Failed to toggle todo: database unavailable")
    );
}

#[tokio::test]
async fn test_toggle_success_applies_server_copy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/todos/1/complete"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "title": "Buy milk", "description": "", "completed": true
        })))
        .mount(&mock_server)
        .await;

    let store = seeded_store(&mock_server, vec![todo(1, "Buy milk", false)]);

    let mut handle = store
        .send(TodoAppAction::ToggleRequested {
            id: TodoId::new(1),
            completed: true,
        })
        .await
        .unwrap();
    handle.wait().await;

    let state = store.state(std::clone::Clone::clone).await;
    assert!(state.todos[0].completed);
    assert!(state.banner_error.is_none());
}

#[tokio::test]
async fn test_delete_removes_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let store = seeded_store(
        &mock_server,
        vec![todo(1, "Keep", false), todo(2, "Drop", true)],
    );

    let mut handle = store
        .send(TodoAppAction::DeleteRequested {
            id: TodoId::new(2),
        })
        .await
        .unwrap();

    // Still listed while the request is in flight.
    assert_eq!(store.state(|s| s.todos.len()).await, 2);

    handle.wait().await;

    let state = store.state(std::clone::Clone::clone).await;
    assert_eq!(state.todos, vec![todo(1, "Keep", false)]);
    assert!(state.banner_error.is_none());
}

#[tokio::test]
async fn test_duplicate_toggle_sends_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/todos/1/complete"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "id": 1, "title": "Buy milk", "description": "", "completed": true
                }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = seeded_store(&mock_server, vec![todo(1, "Buy milk", false)]);

    let mut first = store
        .send(TodoAppAction::ToggleRequested {
            id: TodoId::new(1),
            completed: true,
        })
        .await
        .unwrap();

    // Second toggle while the first is in flight: ignored, no request.
    let mut second = store
        .send(TodoAppAction::ToggleRequested {
            id: TodoId::new(1),
            completed: false,
        })
        .await
        .unwrap();
    second.wait().await;
    first.wait().await;

    let state = store.state(std::clone::Clone::clone).await;
    assert!(state.todos[0].completed);
    // MockServer verifies the expect(1) on drop.
}
