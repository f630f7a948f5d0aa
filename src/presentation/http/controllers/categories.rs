// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{
        CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
    },
    dto::CategoryDto,
    queries::categories::{GetCategoryQuery, ListCategoriesQuery},
};
use crate::domain::category::CategoryListScope;
use crate::presentation::http::controllers::{
    DataBody, MessageBody, StatusMessage, deserialize_some,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All categories with post counts, ordered by name.", body = DataBody<Vec<CategoryDto>>)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
) -> HttpResult<Json<DataBody<Vec<CategoryDto>>>> {
    state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            scope: CategoryListScope::All,
        })
        .await
        .into_http()
        .map(|data| Json(DataBody { data }))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Category created.", body = MessageBody<CategoryDto>),
        (status = 409, description = "Slug conflict that survived the retry loop."),
        (status = 422, description = "Validation failure.")
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<MessageBody<CategoryDto>>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
    };

    let created = state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Category created successfully".into(),
            data: created,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id.")),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The category with its post count.", body = DataBody<CategoryDto>),
        (status = 404, description = "No such category.")
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<DataBody<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_category(GetCategoryQuery { id })
        .await
        .into_http()
        .map(|data| Json(DataBody { data }))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id.")),
    request_body = UpdateCategoryRequest,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Category updated.", body = MessageBody<CategoryDto>),
        (status = 404, description = "No such category."),
        (status = 422, description = "Validation failure.")
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<MessageBody<CategoryDto>>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
    };

    state
        .services
        .category_commands
        .update_category(command)
        .await
        .into_http()
        .map(|data| {
            Json(MessageBody {
                message: "Category updated successfully".into(),
                data,
            })
        })
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id.")),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Category deleted.", body = StatusMessage),
        (status = 404, description = "No such category."),
        (status = 422, description = "The category still has posts.")
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusMessage>> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusMessage {
        message: "Category deleted successfully".into(),
    }))
}
