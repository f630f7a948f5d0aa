// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser},
};
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and checks the opaque bearer tokens the admin surface runs on.
/// Token plaintext is never stored; at rest only a digest exists.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, user: &User) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
    async fn revoke(&self, token: &str) -> ApplicationResult<()>;
}
