use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{auth, projects};
use crate::config::Config;
use crate::db::repo::{ProjectStore, UserStore};

/// Everything the handlers share. Built once per server (or per test).
pub struct AppState {
    pub users: UserStore,
    pub projects: ProjectStore,
}

impl AppState {
    pub fn new(users: UserStore, projects: ProjectStore) -> Self {
        Self { users, projects }
    }

    pub fn seeded() -> Self {
        Self::new(UserStore::seeded(), ProjectStore::seeded())
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn start_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Backend listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
