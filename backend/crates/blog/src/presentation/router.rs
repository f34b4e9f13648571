//! Blog Route Table
//!
//! Three tiers sharing the same paths:
//! - optional identity (post listing, so drafts show up for their author)
//! - open (reads with no middleware at all)
//! - bearer-protected writes

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};

use auth::presentation::middleware::{require_auth, set_user};
use auth::AuthLayerState;
use platform::token::TokenSigner;

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Blog router over the PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository, signer: Arc<TokenSigner>) -> Router {
    blog_router_with(Arc::new(repo), signer)
}

/// Blog router over any repository implementation
pub fn blog_router_with<R>(repo: Arc<R>, signer: Arc<TokenSigner>) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState::new(repo);
    let layer_state = AuthLayerState { signer };

    let optional = Router::new()
        .route("/", get(handlers::list_posts::<R>))
        .route_layer(from_fn_with_state(layer_state.clone(), set_user))
        .with_state(state.clone());

    let open = Router::new()
        .route("/{id}", get(handlers::get_post::<R>))
        .route("/{post_id}/comments", get(handlers::list_comments::<R>))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/", post(handlers::create_post::<R>))
        .route(
            "/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route("/{post_id}/comments", post(handlers::create_comment::<R>))
        .route(
            "/{post_id}/comments/{comment_id}",
            delete(handlers::delete_comment::<R>),
        )
        .route_layer(from_fn_with_state(layer_state, require_auth))
        .with_state(state);

    optional.merge(open).merge(protected)
}
