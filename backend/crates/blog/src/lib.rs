//! Blog (Posts & Comments) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Post and comment use cases
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Post listing with pagination, title search and visibility (published
//!   posts for everyone, drafts only for their author)
//! - Ownership-gated post update and delete
//! - Flat comments per post with author-only deletion
//!
//! Reads join the author's public profile; writes return the raw post row.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::blog_router;
