use async_trait::async_trait;
use sqlx::PgPool;

use crate::bookmarks::repo_types::{Bookmark, BookmarkPatch, NewBookmark};
use crate::error::StoreError;

const BOOKMARK_COLUMNS: &str = "id, user_id, link, title, description, created_at, updated_at";

/// Bookmark storage. Every operation is scoped to `user_id`.
#[async_trait]
pub trait BookmarkRepo: Send + Sync {
    async fn list(&self, user_id: i64) -> Result<Vec<Bookmark>, StoreError>;
    async fn get(&self, user_id: i64, id: i64) -> Result<Option<Bookmark>, StoreError>;
    async fn create(&self, user_id: i64, new: NewBookmark) -> Result<Bookmark, StoreError>;
    /// `None` when no row matches `(user_id, id)`.
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        patch: BookmarkPatch,
    ) -> Result<Option<Bookmark>, StoreError>;
    /// Number of rows removed.
    async fn delete(&self, user_id: i64, id: i64) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct PgBookmarkRepo {
    db: PgPool,
}

impl PgBookmarkRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkRepo for PgBookmarkRepo {
    async fn list(&self, user_id: i64) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            SELECT {BOOKMARK_COLUMNS}
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY id ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, user_id: i64, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            SELECT {BOOKMARK_COLUMNS}
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, user_id: i64, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            INSERT INTO bookmarks (user_id, link, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {BOOKMARK_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(new.link)
        .bind(new.title)
        .bind(new.description)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        patch: BookmarkPatch,
    ) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            UPDATE bookmarks
               SET link        = COALESCE($3, link),
                   title       = COALESCE($4, title),
                   description = COALESCE($5, description),
                   updated_at  = now()
             WHERE id = $1 AND user_id = $2
            RETURNING {BOOKMARK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(patch.link)
        .bind(patch.title)
        .bind(patch.description)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<u64, StoreError> {
        let res = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected())
    }
}
