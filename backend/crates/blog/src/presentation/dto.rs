//! Blog Request DTOs
//!
//! Responses serialize the domain entities directly; only requests need
//! dedicated types here.

use serde::Deserialize;

use kernel::validation::FieldErrors;

use crate::domain::entity::{NewPost, PostPatch};
use crate::error::BlogResult;

const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub published: Option<bool>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> BlogResult<()> {
        let mut errors = FieldErrors::new();

        if self.title.is_empty() {
            errors.push("title", "Title is required");
        } else if self.title.len() > MAX_TITLE_LEN {
            errors.push("title", "Title cannot exceed 255 characters");
        }

        if self.content.is_empty() {
            errors.push("content", "Content is required");
        }

        errors.into_result().map_err(Into::into)
    }

    pub fn into_new_post(self, author_id: i64) -> NewPost {
        NewPost {
            title: self.title,
            content: self.content,
            published: self.published.unwrap_or(false),
            author_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> BlogResult<()> {
        let mut errors = FieldErrors::new();

        if let Some(title) = &self.title
            && title.len() > MAX_TITLE_LEN
        {
            errors.push("title", "Title cannot exceed 255 characters");
        }

        errors.into_result().map_err(Into::into)
    }

    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            content: self.content,
            published: self.published,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

impl ListPostsQuery {
    /// Validate and apply defaults (page 1, limit 10, empty search).
    pub fn resolve(self) -> BlogResult<(i64, i64, String)> {
        let mut errors = FieldErrors::new();

        if matches!(self.page, Some(p) if p < 1) {
            errors.push("page", "Page must be a positive integer");
        }
        if matches!(self.limit, Some(l) if l < 1) {
            errors.push("limit", "Limit must be a positive integer");
        }

        errors.into_result()?;

        Ok((
            self.page.unwrap_or(1),
            self.limit.unwrap_or(10),
            self.search.unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> BlogResult<()> {
        let mut errors = FieldErrors::new();

        if self.content.is_empty() {
            errors.push("content", "Content is required");
        }

        errors.into_result().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_requires_title_and_content() {
        let req = CreatePostRequest {
            title: String::new(),
            content: String::new(),
            published: None,
        };
        let msg = req.validate().unwrap_err().to_string();
        assert!(msg.contains("title: Title is required"));
        assert!(msg.contains("content: Content is required"));
    }

    #[test]
    fn create_post_caps_title_length() {
        let req = CreatePostRequest {
            title: "x".repeat(256),
            content: "body".into(),
            published: None,
        };
        assert!(
            req.validate()
                .unwrap_err()
                .to_string()
                .contains("Title cannot exceed 255 characters")
        );

        let ok = CreatePostRequest {
            title: "x".repeat(255),
            content: "body".into(),
            published: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn unpublished_is_the_default() {
        let req = CreatePostRequest {
            title: "t".into(),
            content: "c".into(),
            published: None,
        };
        assert!(!req.into_new_post(1).published);
    }

    #[test]
    fn list_query_defaults_and_bounds() {
        let defaults = ListPostsQuery {
            page: None,
            limit: None,
            search: None,
        };
        assert_eq!(defaults.resolve().unwrap(), (1, 10, String::new()));

        let bad = ListPostsQuery {
            page: Some(0),
            limit: Some(-5),
            search: None,
        };
        let msg = bad.resolve().unwrap_err().to_string();
        assert!(msg.contains("page:"));
        assert!(msg.contains("limit:"));
    }
}
