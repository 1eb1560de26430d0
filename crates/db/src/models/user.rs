//! User entity model and DTOs.

use scribe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// `password_hash` is deliberately not serialized; public views go through
/// [`UserView`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_banned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a user, safe to return to any caller.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub is_banned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        UserView {
            id: u.id,
            email: u.email,
            name: u.name,
            avatar: u.avatar,
            is_admin: u.is_admin,
            is_banned: u.is_banned,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// DTO for creating a new user. The password arrives hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub password_hash: String,
}

/// Admin-side partial update. `password_hash` replaces the stored hash
/// when present; the plaintext is hashed by the caller before it gets here.
#[derive(Debug, Clone, Default)]
pub struct AdminUpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
    pub is_banned: Option<bool>,
}
