//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{CommentWithAuthor, NewPost, Post, PostPatch, PostWithAuthor};
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// One page of posts visible to `viewer`, newest first.
    ///
    /// Visible means published, or owned by `viewer`. `search` filters on
    /// title substring (case-sensitive); empty means no filter.
    async fn find_page(
        &self,
        page: i64,
        limit: i64,
        search: &str,
        viewer: Option<i64>,
    ) -> BlogResult<Vec<PostWithAuthor>>;

    /// Total number of posts matching `search` alone. The visibility filter
    /// is intentionally NOT applied here, matching `find_page` consumers
    /// that paginate over this count.
    async fn count_matching(&self, search: &str) -> BlogResult<i64>;

    /// Find a post by id, regardless of published state
    async fn find_by_id(&self, id: i64) -> BlogResult<Option<PostWithAuthor>>;

    /// Insert a new post, returning the stored row (None if the insert
    /// yielded no row)
    async fn create(&self, post: &NewPost) -> BlogResult<Option<Post>>;

    /// Apply `patch` to the post matching (id, author_id) and refresh
    /// `updated_at`. None when no row matches.
    async fn update(&self, id: i64, author_id: i64, patch: &PostPatch) -> BlogResult<Option<Post>>;

    /// Delete the post matching (id, author_id). False when no row matches.
    async fn delete(&self, id: i64, author_id: i64) -> BlogResult<bool>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// All comments on a post, oldest first
    async fn find_by_post_id(&self, post_id: i64) -> BlogResult<Vec<CommentWithAuthor>>;

    /// Find a comment by id
    async fn find_by_id(&self, id: i64) -> BlogResult<Option<CommentWithAuthor>>;

    /// Insert a comment and return it re-read with its author. The post's
    /// existence is not checked here; a dangling post id is a database
    /// error at the caller.
    async fn create(
        &self,
        content: &str,
        post_id: i64,
        author_id: i64,
    ) -> BlogResult<Option<CommentWithAuthor>>;

    /// Delete a comment by id
    async fn delete(&self, id: i64) -> BlogResult<()>;
}
