// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::security::{PasswordHasher, TokenManager},
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
        }
    }
}
