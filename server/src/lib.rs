//! HTTP surface for the todo store.
//!
//! # Design
//! A single `TodoStore` lives behind `Arc<RwLock<_>>`; mutating
//! handlers take the write lock so no two creates can observe the same
//! id counter value. Request bodies are taken as raw bytes and parsed
//! with `serde_json` in the handlers, so validation failures produce
//! this service's own 400 `{"error": ...}` bodies instead of extractor
//! rejections.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use todo_core::{CompletedPatch, Todo, TodoStore};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod cors;
mod error;

pub use error::ApiError;

pub type Db = Arc<RwLock<TodoStore>>;

/// Router with the default allow-any-origin CORS policy.
pub fn app() -> Router {
    app_with_cors(cors::allow_any())
}

pub fn app_with_cors(cors: CorsLayer) -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::new()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_cors(cors::from_env())).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let text = text_field(&body)?;
    let todo = db.write().await.create(&text)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let patch = completed_patch(&body);
    let todo = db.write().await.update(id, patch)?;
    Ok(Json(todo))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, ApiError> {
    db.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Extract the `text` field from a create body.
///
/// The body must be valid JSON with a string `text` key; the store
/// handles trimming and the empty check.
fn text_field(body: &[u8]) -> Result<String, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
    match value.get("text").and_then(serde_json::Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => Err(ApiError::MissingText),
    }
}

/// Map an update body to a `CompletedPatch`.
///
/// Only a boolean `completed` field maps to `Set`; anything else —
/// field absent, null, non-boolean, an empty or malformed body —
/// falls back to `Toggle`. An update is never rejected for its body
/// shape; this is the "click to toggle" convenience contract.
fn completed_patch(body: &[u8]) -> CompletedPatch {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => match value.get("completed") {
            Some(serde_json::Value::Bool(b)) => CompletedPatch::Set(*b),
            _ => CompletedPatch::Toggle,
        },
        Err(_) => CompletedPatch::Toggle,
    }
}
