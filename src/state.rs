use crate::auth::repo::{PgUserRepo, UserRepo};
use crate::bookmarks::repo::{BookmarkRepo, PgBookmarkRepo};
use crate::config::AppConfig;
use crate::db;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepo>,
    pub bookmarks: Arc<dyn BookmarkRepo>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let pool = db::connect(&config).await?;

        let users = Arc::new(PgUserRepo::new(pool.clone())) as Arc<dyn UserRepo>;
        let bookmarks = Arc::new(PgBookmarkRepo::new(pool)) as Arc<dyn BookmarkRepo>;

        Ok(Self::from_parts(config, users, bookmarks))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserRepo>,
        bookmarks: Arc<dyn BookmarkRepo>,
    ) -> Self {
        Self {
            config,
            users,
            bookmarks,
        }
    }
}
