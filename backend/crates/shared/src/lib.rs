//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of API vocabulary:
//! - Common error types and result aliases
//! - Response envelope types
//! - Cross-cutting request validation primitives
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod response;
pub mod validation;
