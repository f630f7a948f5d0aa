// src/application/commands/users/logout.rs
use super::service::UserCommandService;
use crate::application::error::ApplicationResult;

impl UserCommandService {
    pub async fn logout(&self, token: &str) -> ApplicationResult<()> {
        self.token_manager.revoke(token).await
    }
}
