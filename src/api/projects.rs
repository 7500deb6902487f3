use axum::{extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::server::AppState;
use crate::db::models::Project;

pub async fn list_projects(State(state): State<Arc<AppState>>) -> Json<Vec<Project>> {
    Json(state.projects.list().await)
}

/// Any JSON object is accepted and stored as-is, apart from `id`.
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Map<String, Value>>,
) -> Json<Project> {
    let project = state.projects.create(body).await;
    tracing::debug!(
        id = %project.id,
        code = ?project.code(),
        name = ?project.name(),
        "project created"
    );
    Json(project)
}
