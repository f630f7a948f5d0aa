// src/application/commands/users/login.rs
use super::service::UserCommandService;
use crate::{
    application::{
        dto::LoginResponseDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Exchange credentials for an opaque bearer token. Unknown address and
    /// wrong password fail identically so the endpoint does not leak which
    /// accounts exist.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResponseDto> {
        let email = Email::new(command.email)
            .map_err(|_| Self::invalid_credentials())?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(Self::invalid_credentials)?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|_| Self::invalid_credentials())?;

        let token = self.token_manager.issue(&user).await?;
        Ok(LoginResponseDto {
            user: user.into(),
            token: token.token,
            expires_at: token.expires_at,
        })
    }

    fn invalid_credentials() -> ApplicationError {
        ApplicationError::validation("the provided credentials are incorrect")
    }
}
