use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::db::models::PublicUser;

/// Both fields are optional so that an incomplete body is just a failed
/// login rather than an extractor rejection.
#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: PublicUser,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        tracing::debug!("login rejected: incomplete credentials");
        return Err(ApiError::InvalidCredentials);
    };

    match state.users.find_by_credentials(&email, &password) {
        Some(user) => Ok(Json(LoginResponse {
            ok: true,
            user: PublicUser::from(user),
        })),
        None => {
            tracing::debug!(%email, "login rejected");
            Err(ApiError::InvalidCredentials)
        }
    }
}
