// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// The raw bearer token alongside the authenticated user, for endpoints
/// that act on the presented token itself (logout).
#[derive(Debug, Clone)]
pub struct AuthenticatedToken {
    pub user: AuthenticatedUser,
    pub token: String,
}

fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    parts
        .extensions
        .get::<HttpState>()
        .cloned()
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })
}

fn bearer_token(parts: &Parts) -> Result<String, HttpError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "missing Authorization header".into(),
            ))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts)?;
        let token = bearer_token(parts)?;
        let manager = app_state.services.token_manager();
        let user = manager
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for AuthenticatedToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts)?;
        let token = bearer_token(parts)?;
        let manager = app_state.services.token_manager();
        let user = manager
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self { user, token })
    }
}
