// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, UserName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

/// An issued bearer token, stored as a digest. The plaintext token leaves the
/// process exactly once, in the login response.
#[derive(Debug, Clone)]
pub struct NewAccessToken {
    pub user_id: UserId,
    pub token_hash: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
