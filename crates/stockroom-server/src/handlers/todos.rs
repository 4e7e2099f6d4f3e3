//! Todo handlers

use crate::error::Result;
use crate::extractors::{AppForm, AppPath};
use crate::AppState;
use axum::{extract::State, Json};
use stockroom_core::{TodoForm, TodoItem};
use tracing::debug;

pub async fn get(
    State(state): State<AppState>,
    AppPath(todo_id): AppPath<String>,
) -> Result<Json<TodoItem>> {
    let value = state.todos.get(&todo_id)?;

    Ok(Json(TodoItem::new(todo_id, value)))
}

pub async fn put(
    State(state): State<AppState>,
    AppPath(todo_id): AppPath<String>,
    AppForm(form): AppForm<TodoForm>,
) -> Result<Json<TodoItem>> {
    debug!("Storing todo: {}", todo_id);
    let value = state.todos.set(&todo_id, form.data);

    Ok(Json(TodoItem::new(todo_id, value)))
}
