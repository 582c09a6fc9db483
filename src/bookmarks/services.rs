use tracing::debug;

use crate::{
    bookmarks::{
        dto::{CreateBookmarkRequest, EditBookmarkRequest},
        repo::BookmarkRepo,
        repo_types::Bookmark,
    },
    error::AppError,
};

fn require_non_empty(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(AppError::Validation(format!("{field} should not be empty")))
        }
        _ => Ok(()),
    }
}

pub async fn list(repo: &dyn BookmarkRepo, user_id: i64) -> Result<Vec<Bookmark>, AppError> {
    Ok(repo.list(user_id).await?)
}

pub async fn get(
    repo: &dyn BookmarkRepo,
    user_id: i64,
    id: i64,
) -> Result<Option<Bookmark>, AppError> {
    Ok(repo.get(user_id, id).await?)
}

pub async fn create(
    repo: &dyn BookmarkRepo,
    user_id: i64,
    req: CreateBookmarkRequest,
) -> Result<Bookmark, AppError> {
    require_non_empty("link", Some(&req.link))?;
    require_non_empty("title", Some(&req.title))?;
    let bookmark = repo.create(user_id, req.into()).await?;
    debug!(user_id, bookmark_id = bookmark.id, "bookmark created");
    Ok(bookmark)
}

/// Zero matched rows is not an error: the caller gets `None`.
pub async fn edit(
    repo: &dyn BookmarkRepo,
    user_id: i64,
    id: i64,
    req: EditBookmarkRequest,
) -> Result<Option<Bookmark>, AppError> {
    require_non_empty("link", req.link.as_deref())?;
    require_non_empty("title", req.title.as_deref())?;
    let bookmark = repo.update(user_id, id, req.into()).await?;
    if bookmark.is_none() {
        debug!(user_id, bookmark_id = id, "edit matched no bookmark");
    }
    Ok(bookmark)
}

pub async fn delete(repo: &dyn BookmarkRepo, user_id: i64, id: i64) -> Result<(), AppError> {
    let removed = repo.delete(user_id, id).await?;
    debug!(user_id, bookmark_id = id, removed, "bookmark delete");
    Ok(())
}
