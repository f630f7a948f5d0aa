// tests/support/mocks/security.rs
use async_trait::async_trait;
use quillpress::application::error::{ApplicationError, ApplicationResult};
use quillpress::application::ports::security::PasswordHasher;

/// Reversible stand-in for argon2 so credential tests stay fast and
/// deterministic.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

pub fn plain_hash(password: &str) -> String {
    format!("plain:{password}")
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(plain_hash(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if plain_hash(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
