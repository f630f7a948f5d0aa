// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::LoginCommand,
    dto::UserDto,
};
use crate::presentation::http::controllers::StatusMessage;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, AuthenticatedToken};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserDto,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted; an opaque bearer token is issued.", body = LoginResponse),
        (status = 422, description = "The provided credentials are incorrect.")
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        user: result.user,
        token: result.token,
        expires_at: result.expires_at,
    }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The presented token is revoked.", body = StatusMessage),
        (status = 401, description = "Missing or invalid token.")
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    auth: AuthenticatedToken,
) -> HttpResult<Json<StatusMessage>> {
    state
        .services
        .user_commands
        .logout(&auth.token)
        .await
        .into_http()?;

    Ok(Json(StatusMessage {
        message: "Logout successful".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/user",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The authenticated user.", body = CurrentUserResponse),
        (status = 401, description = "Missing or invalid token.")
    ),
    tag = "Auth"
)]
pub async fn current_user(
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<CurrentUserResponse>> {
    Ok(Json(CurrentUserResponse {
        user: UserDto {
            id: actor.id.into(),
            name: actor.name,
            email: actor.email,
        },
    }))
}
