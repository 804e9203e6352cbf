use axum::extract::{Path, Query, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::display_mode::DisplayMode;
use crate::error::AppError;
use crate::models::{Criteria, NewTodo, Todo, TodoPatch};
use crate::routes::{Route, ROUTES};
use crate::store::{lock, TodoStore};
use crate::AppState;

/// Attribute filters for listing. An explicit `finished` overrides `mode`.
#[derive(Debug, Default, Deserialize)]
pub struct FindQuery {
    pub label: Option<String>,
    pub finished: Option<bool>,
    pub mode: Option<DisplayMode>,
}

impl FindQuery {
    fn criteria(self) -> Criteria {
        let mut criteria = self.mode.map(Criteria::from).unwrap_or_default();
        if self.finished.is_some() {
            criteria.finished = self.finished;
        }
        criteria.label = self.label;
        criteria
    }
}

pub async fn find_todos(
    State(state): State<AppState>,
    Query(query): Query<FindQuery>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let criteria = query.criteria();
    let store = lock(&state.store)?;
    let todos: Vec<Todo> = store.find(criteria.clone()).cloned().collect();
    info!(count = todos.len(), ?criteria, "Listed todos");
    Ok(Json(todos))
}

pub async fn create_new_todo(
    State(state): State<AppState>,
    Json(req): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = lock(&state.store)?.insert(req)?;
    info!(id = todo.id, label = %todo.label, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_single_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    match lock(&state.store)?.get(id) {
        Some(todo) => Ok(Json(todo.clone())),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_existing_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TodoPatch>,
) -> Result<Json<Todo>, AppError> {
    let todo = lock(&state.store)?.update(id, req)?;
    info!(id = todo.id, finished = todo.finished, "Updated todo");
    Ok(Json(todo))
}

pub async fn delete_existing_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    lock(&state.store)?.delete(id)?;
    info!(id, "Deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_finished(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let deleted = lock(&state.store)?.delete_where(&DisplayMode::Finished.criteria());
    info!(deleted, "Cleared finished todos");
    Ok(Json(json!({ "deleted": deleted })))
}

pub async fn list_routes() -> Json<&'static [Route]> {
    Json(&ROUTES)
}
