// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewAccessToken, User};
use crate::domain::user::value_objects::{Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}

#[async_trait]
pub trait AccessTokenRepository: Send + Sync {
    async fn insert(&self, token: NewAccessToken) -> DomainResult<()>;
    /// Resolve the user owning a non-expired token digest.
    async fn find_user(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<User>>;
    async fn revoke(&self, token_hash: &str) -> DomainResult<()>;
}
