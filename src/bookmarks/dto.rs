use serde::Deserialize;

use crate::bookmarks::repo_types::{BookmarkPatch, NewBookmark};

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub link: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkRequest {
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<CreateBookmarkRequest> for NewBookmark {
    fn from(r: CreateBookmarkRequest) -> Self {
        Self {
            link: r.link,
            title: r.title,
            description: r.description,
        }
    }
}

impl From<EditBookmarkRequest> for BookmarkPatch {
    fn from(r: EditBookmarkRequest) -> Self {
        Self {
            link: r.link,
            title: r.title,
            description: r.description,
        }
    }
}
