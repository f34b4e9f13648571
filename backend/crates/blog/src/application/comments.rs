//! Comment Use Cases

use std::sync::Arc;

use crate::domain::entity::CommentWithAuthor;
use crate::domain::repository::CommentRepository;
use crate::error::{BlogError, BlogResult};

/// List comments use case
pub struct ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(&self, post_id: i64) -> BlogResult<Vec<CommentWithAuthor>> {
        self.comment_repo.find_by_post_id(post_id).await
    }
}

/// Create comment use case.
///
/// The post id is taken on faith; a dangling id trips the foreign key and
/// surfaces as a database error.
pub struct CreateCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> CreateCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(
        &self,
        content: &str,
        post_id: i64,
        author_id: i64,
    ) -> BlogResult<CommentWithAuthor> {
        let comment = self
            .comment_repo
            .create(content, post_id, author_id)
            .await?
            .ok_or(BlogError::CommentNotFound)?;

        tracing::info!(comment_id = comment.id, post_id, "Comment created");

        Ok(comment)
    }
}

/// Delete comment use case. Only the comment's author may delete it.
pub struct DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(&self, comment_id: i64, user_id: i64) -> BlogResult<()> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or(BlogError::CommentNotFound)?;

        // A comment whose author row is gone cannot be modified by anyone
        let owned = comment.author.as_ref().is_some_and(|a| a.id == user_id);
        if !owned {
            return Err(BlogError::CommentNotAuthorized);
        }

        self.comment_repo.delete(comment_id).await?;

        tracing::info!(comment_id, "Comment deleted");

        Ok(())
    }
}
