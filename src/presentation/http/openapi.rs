// src/presentation/http/openapi.rs
use axum::Router;
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    AuthTokenDto, CategoryDto, Page, PageMeta, PostAuthorDto, PostCategoryDto, PostDto,
    PostListItemDto, UserDto,
};
use crate::application::queries::posts::CategoryFeedDto;
use crate::presentation::http::controllers::{
    DataBody, MessageBody, StatusMessage,
    auth::{CurrentUserResponse, LoginRequest, LoginResponse},
    categories::{CreateCategoryRequest, UpdateCategoryRequest},
    posts::{CreatePostRequest, UpdatePostRequest},
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "quillpress API",
        description = "Blogging platform REST API: public reading surface plus token-protected management endpoints."
    ),
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::current_user,
        crate::presentation::http::controllers::public::list_posts,
        crate::presentation::http::controllers::public::get_post_by_slug,
        crate::presentation::http::controllers::public::list_categories,
        crate::presentation::http::controllers::public::get_category_by_slug,
        crate::presentation::http::controllers::public::list_category_posts,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
    ),
    components(schemas(
        StatusResponse,
        StatusMessage,
        PageMeta,
        Page<PostListItemDto>,
        DataBody<PostDto>,
        DataBody<CategoryDto>,
        DataBody<Vec<CategoryDto>>,
        MessageBody<PostDto>,
        MessageBody<CategoryDto>,
        PostDto,
        PostListItemDto,
        PostAuthorDto,
        PostCategoryDto,
        CategoryDto,
        CategoryFeedDto,
        UserDto,
        AuthTokenDto,
        LoginRequest,
        LoginResponse,
        CurrentUserResponse,
        CreatePostRequest,
        UpdatePostRequest,
        CreateCategoryRequest,
        UpdateCategoryRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Public", description = "Unauthenticated reading surface."),
        (name = "Posts", description = "Post management."),
        (name = "Categories", description = "Category management."),
        (name = "Auth", description = "Token issuance and revocation."),
        (name = "System", description = "Operational endpoints.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
