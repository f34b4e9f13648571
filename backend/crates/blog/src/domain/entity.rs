//! Blog Domain Entities
//!
//! Two read shapes exist on purpose: writes return the raw post row
//! (including `authorId`), reads return the row joined with the author's
//! public profile instead.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public author profile embedded in read responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Raw post row, as returned by create and update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post joined with its author, as returned by list and get.
///
/// `author` is `None` when the joined user row is gone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<Author>,
}

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: i64,
}

/// Partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// Comment joined with its author
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthor {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<Author>,
}

/// Pagination block accompanying a post page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total_posts: i64,
    pub total_pages: i64,
}

/// One page of posts plus its pagination block
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub posts: Vec<PostWithAuthor>,
    pub pagination: Pagination,
}
