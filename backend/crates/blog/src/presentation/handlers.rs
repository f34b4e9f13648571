//! Blog HTTP Handlers
//!
//! Post endpoints respond inside the `{success, data}` envelope; comment
//! endpoints respond with bare JSON. Both shapes are part of the public
//! contract.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{Value, json};

use auth::{AuthUser, MaybeAuthUser};
use kernel::response::{ApiMessage, ApiResponse};

use crate::application::comments::{
    CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
};
use crate::application::posts::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsInput, ListPostsUseCase,
    UpdatePostUseCase,
};
use crate::domain::entity::{CommentWithAuthor, Post, PostPage, PostWithAuthor};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::BlogError;
use crate::presentation::dto::{
    CreateCommentRequest, CreatePostRequest, ListPostsQuery, UpdatePostRequest,
};

/// Shared state for the blog routes
#[derive(Clone)]
pub struct BlogAppState<R> {
    pub repo: Arc<R>,
}

impl<R> BlogAppState<R>
where
    R: PostRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
    Extension(MaybeAuthUser(viewer)): Extension<MaybeAuthUser>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<ApiResponse<PostPage>>, BlogError>
where
    R: PostRepository + CommentRepository,
{
    let (page, limit, search) = query.resolve()?;

    let use_case = ListPostsUseCase::new(Arc::clone(&state.repo));
    let result = use_case
        .execute(ListPostsInput {
            page,
            limit,
            search,
            viewer: viewer.map(|u| u.id),
        })
        .await?;

    Ok(Json(ApiResponse::new(result)))
}

/// GET /posts/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PostWithAuthor>>, BlogError>
where
    R: PostRepository + CommentRepository,
{
    let use_case = GetPostUseCase::new(Arc::clone(&state.repo));
    let post = use_case.execute(id).await?;

    Ok(Json(ApiResponse::new(post)))
}

/// POST /posts
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Post>>), BlogError>
where
    R: PostRepository + CommentRepository,
{
    payload.validate()?;

    let use_case = CreatePostUseCase::new(Arc::clone(&state.repo));
    let post = use_case.execute(payload.into_new_post(user.id)).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(post))))
}

/// PUT /posts/{id}
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<Post>>, BlogError>
where
    R: PostRepository + CommentRepository,
{
    payload.validate()?;

    let use_case = UpdatePostUseCase::new(Arc::clone(&state.repo));
    let post = use_case.execute(id, user.id, payload.into_patch()).await?;

    Ok(Json(ApiResponse::new(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiMessage>, BlogError>
where
    R: PostRepository + CommentRepository,
{
    let use_case = DeletePostUseCase::new(Arc::clone(&state.repo));
    use_case.execute(id, user.id).await?;

    Ok(Json(ApiMessage::new("Post deleted successfully")))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /posts/{post_id}/comments
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<CommentWithAuthor>>, BlogError>
where
    R: PostRepository + CommentRepository,
{
    let use_case = ListCommentsUseCase::new(Arc::clone(&state.repo));
    let comments = use_case.execute(post_id).await?;

    Ok(Json(comments))
}

/// POST /posts/{post_id}/comments
pub async fn create_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthUser>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentWithAuthor>), BlogError>
where
    R: PostRepository + CommentRepository,
{
    payload.validate()?;

    let use_case = CreateCommentUseCase::new(Arc::clone(&state.repo));
    let comment = use_case.execute(&payload.content, post_id, user.id).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthUser>,
    Path((_post_id, comment_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, BlogError>
where
    R: PostRepository + CommentRepository,
{
    let use_case = DeleteCommentUseCase::new(Arc::clone(&state.repo));
    use_case.execute(comment_id, user.id).await?;

    Ok(Json(json!({ "message": "Comment deleted successfully" })))
}
