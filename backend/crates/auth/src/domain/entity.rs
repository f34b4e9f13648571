//! Auth Entities
//!
//! `User` and `RefreshToken` as stored rows. Ids are database-assigned, so
//! insertion goes through the `New*` companions.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User row, including the password hash. Never serialized as-is; handlers
/// go through [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Projection without the password hash, for API responses.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// User fields for insertion (id and timestamps are store-assigned).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Argon2id PHC string
    pub password: String,
    pub role: String,
}

/// Public user projection: id, name, email, role - no password hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Stored refresh token row. Several rows may coexist per user; there is no
/// single-session enforcement.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: i64,
    pub token: String,
    pub user_id: i64,
    pub expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Valid only while `now < expires` and the row still exists.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires
    }
}
