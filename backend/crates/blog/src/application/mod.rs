//! Blog Use Cases

pub mod comments;
pub mod posts;

pub use comments::{CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase};
pub use posts::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsInput, ListPostsUseCase,
    UpdatePostUseCase,
};
