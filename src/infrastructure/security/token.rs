// src/infrastructure/security/token.rs
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::{AccessTokenRepository, NewAccessToken, User};

/// Opaque bearer tokens backed by the access token table. The issued
/// plaintext is random; only its SHA-256 digest is stored, so a leaked
/// database dump does not leak usable credentials.
pub struct DbTokenManager {
    tokens: Arc<dyn AccessTokenRepository>,
    clock: Arc<dyn Clock>,
    ttl: Option<Duration>,
}

impl DbTokenManager {
    pub fn new(
        tokens: Arc<dyn AccessTokenRepository>,
        clock: Arc<dyn Clock>,
        ttl: Option<Duration>,
    ) -> Self {
        Self { tokens, clock, ttl }
    }
}

fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut acc, byte| {
        let _ = write!(acc, "{byte:02x}");
        acc
    })
}

#[async_trait]
impl TokenManager for DbTokenManager {
    async fn issue(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        let now = self.clock.now();
        let expires_at = self
            .ttl
            .map(|ttl| {
                chrono::Duration::from_std(ttl)
                    .map(|ttl| now + ttl)
                    .map_err(|err| ApplicationError::infrastructure(err.to_string()))
            })
            .transpose()?;

        self.tokens
            .insert(NewAccessToken {
                user_id: user.id,
                token_hash: hash_token(&token),
                expires_at,
                created_at: now,
            })
            .await?;

        Ok(AuthTokenDto { token, expires_at })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self
            .tokens
            .find_user(&hash_token(token), self.clock.now())
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired token"))?;
        Ok(user.into())
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        self.tokens.revoke(&hash_token(token)).await?;
        Ok(())
    }
}
