//! HTTP service exposing a shared `TodoStore`.
//!
//! # Design
//! Each handler binds its inputs, takes the store lock once (read guard for
//! lookups, write guard for mutations), calls a single store operation and
//! maps the outcome. Errors flow through `ApiError`, which renders the
//! `{"detail": ...}` body and the status code.

pub mod config;
pub mod error;

use std::{future::Future, sync::Arc};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use todo_core::{Todo, TodoCreate, TodoPatch, TodoStore};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::{ApiError, ErrorBody};

pub type SharedStore = Arc<RwLock<TodoStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub default_first_n: i64,
}

impl AppState {
    pub fn new(store: TodoStore, default_first_n: i64) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            default_first_n,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed {
            TodoStore::seeded()
        } else {
            TodoStore::new()
        };
        Self::new(store, config.default_first_n)
    }
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoMessage {
    pub message: String,
    pub todo: Todo,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub first_n: Option<i64>,
}

/// Router over a store seeded with the example todos and default settings.
pub fn app() -> Router {
    router(AppState::from_config(&Config::default()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/todo", get(list_todos).post(create_todo))
        .route("/todo/{todo_id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve `state` on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World" }))
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let todos = state.store.read().await.len();
    Json(serde_json::json!({ "status": "ok", "todos": todos }))
}

async fn list_todos(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let Query(params) = params?;
    let first_n = params.first_n.unwrap_or(state.default_first_n);
    let todos = state.store.read().await.list_first_n(Some(first_n))?;
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    Ok(Json(store.get_by_id(id)?.clone()))
}

async fn create_todo(
    State(state): State<AppState>,
    input: Result<Json<TodoCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = input?;
    let todo = state.store.write().await.create(input)?;
    tracing::debug!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    patch: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<TodoMessage>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = patch?;
    let todo = state.store.write().await.update(id, patch)?;
    tracing::debug!(id, "todo updated");
    Ok(Json(TodoMessage {
        message: "Todo updated successfully".to_string(),
        todo,
    }))
}

async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<TodoMessage>, ApiError> {
    let Path(id) = id?;
    let todo = state.store.write().await.delete(id)?;
    tracing::debug!(id, "todo deleted");
    Ok(Json(TodoMessage {
        message: "Todo deleted successfully".to_string(),
        todo,
    }))
}
