//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no domain
//! knowledge:
//! - Password hashing and verification (Argon2id, PHC strings)
//! - JWT access/refresh token signing and verification

pub mod password;
pub mod token;
