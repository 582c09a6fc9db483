use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{AuthRequest, AuthResponse},
        jwt::JwtKeys,
        services,
    },
    error::{AppError, AppJson},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AuthRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let keys = JwtKeys::from_ref(&state);
    let res = services::signup(state.users.as_ref(), &keys, &payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let keys = JwtKeys::from_ref(&state);
    let res = services::signin(state.users.as_ref(), &keys, &payload.email, &payload.password).await?;
    Ok(Json(res))
}
