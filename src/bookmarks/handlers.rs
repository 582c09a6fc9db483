use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    bookmarks::{
        dto::{CreateBookmarkRequest, EditBookmarkRequest},
        repo_types::Bookmark,
        services,
    },
    error::{AppError, AppJson, AppPath},
    state::AppState,
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark),
        )
}

#[instrument(skip_all, fields(user_id = user.id))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    let items = services::list(state.bookmarks.as_ref(), user.id).await?;
    Ok(Json(items))
}

#[instrument(skip_all, fields(user_id = user.id, bookmark_id = id))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Option<Bookmark>>, AppError> {
    let item = services::get(state.bookmarks.as_ref(), user.id, id).await?;
    Ok(Json(item))
}

#[instrument(skip_all, fields(user_id = user.id))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let item = services::create(state.bookmarks.as_ref(), user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip_all, fields(user_id = user.id, bookmark_id = id))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<EditBookmarkRequest>,
) -> Result<(StatusCode, Json<Option<Bookmark>>), AppError> {
    let item = services::edit(state.bookmarks.as_ref(), user.id, id, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip_all, fields(user_id = user.id, bookmark_id = id))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    services::delete(state.bookmarks.as_ref(), user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
