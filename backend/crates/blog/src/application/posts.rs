//! Post Use Cases

use std::sync::Arc;

use crate::domain::entity::{NewPost, Pagination, Post, PostPage, PostPatch, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// List posts input
pub struct ListPostsInput {
    pub page: i64,
    pub limit: i64,
    pub search: String,
    /// Authenticated caller, when any. Drafts owned by the viewer are
    /// included in the page.
    pub viewer: Option<i64>,
}

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: ListPostsInput) -> BlogResult<PostPage> {
        let posts = self
            .post_repo
            .find_page(input.page, input.limit, &input.search, input.viewer)
            .await?;

        // The total counts only the search filter; visible items on a page
        // may therefore be fewer than the pagination block suggests.
        let total_posts = self.post_repo.count_matching(&input.search).await?;
        let total_pages = if total_posts == 0 {
            0
        } else {
            (total_posts + input.limit - 1) / input.limit
        };

        Ok(PostPage {
            posts,
            pagination: Pagination {
                page: input.page,
                limit: input.limit,
                total_posts,
                total_pages,
            },
        })
    }
}

/// Get post use case. No visibility check: drafts are fetchable by id.
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: i64) -> BlogResult<PostWithAuthor> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post: NewPost) -> BlogResult<Post> {
        let created = self
            .post_repo
            .create(&post)
            .await?
            .ok_or(BlogError::PostCreationFailed)?;

        tracing::info!(post_id = created.id, author_id = created.author_id, "Post created");

        Ok(created)
    }
}

/// Update post use case, gated on ownership
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: i64, author_id: i64, patch: PostPatch) -> BlogResult<Post> {
        let updated = self
            .post_repo
            .update(id, author_id, &patch)
            .await?
            .ok_or(BlogError::UpdateNotAllowed)?;

        tracing::info!(post_id = id, "Post updated");

        Ok(updated)
    }
}

/// Delete post use case, gated on ownership
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: i64, author_id: i64) -> BlogResult<()> {
        if !self.post_repo.delete(id, author_id).await? {
            return Err(BlogError::DeleteNotAllowed);
        }

        tracing::info!(post_id = id, "Post deleted");

        Ok(())
    }
}
