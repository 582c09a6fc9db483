use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{extractors::AuthUser, repo_types::User},
    error::{AppError, AppJson},
    state::AppState,
    users::{dto::EditUserRequest, services},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/me", get(get_me))
        .route("/user", patch(edit_user))
}

#[instrument(skip_all, fields(user_id = user.id))]
pub async fn get_me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

#[instrument(skip_all, fields(user_id = user.id))]
pub async fn edit_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<EditUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = services::edit_user(state.users.as_ref(), user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
