// tests/support/mocks/user_repos.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quillpress::domain::errors::{DomainError, DomainResult};
use quillpress::domain::user::entity::{NewAccessToken, User};
use quillpress::domain::user::repository::{AccessTokenRepository, UserRepository};
use quillpress::domain::user::value_objects::{Email, PasswordHash, UserId, UserName};

use super::security::plain_hash;
use super::time::FIXED_NOW;

pub fn user(id: i64, name: &str, email: &str, password: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: UserName::new(name).unwrap(),
        email: Email::new(email).unwrap(),
        password_hash: PasswordHash::new(plain_hash(password)).unwrap(),
        created_at: *FIXED_NOW,
    }
}

pub struct InMemoryUserRepo {
    users: Vec<User>,
}

impl InMemoryUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.email == *email).cloned())
    }
}

pub struct InMemoryTokenRepo {
    users: Vec<User>,
    tokens: Mutex<Vec<NewAccessToken>>,
}

impl InMemoryTokenRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl AccessTokenRepository for InMemoryTokenRepo {
    async fn insert(&self, token: NewAccessToken) -> DomainResult<()> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.iter().any(|t| t.token_hash == token.token_hash) {
            return Err(DomainError::UniqueViolation {
                column: "token_hash".into(),
            });
        }
        tokens.push(token);
        Ok(())
    }

    async fn find_user(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<User>> {
        let tokens = self.tokens.lock().unwrap();
        let token = tokens.iter().find(|token| {
            token.token_hash == token_hash
                && token.expires_at.is_none_or(|expires_at| expires_at > now)
        });
        Ok(token.and_then(|token| {
            self.users
                .iter()
                .find(|user| user.id == token.user_id)
                .cloned()
        }))
    }

    async fn revoke(&self, token_hash: &str) -> DomainResult<()> {
        let mut tokens = self.tokens.lock().unwrap();
        tokens.retain(|token| token.token_hash != token_hash);
        Ok(())
    }
}
