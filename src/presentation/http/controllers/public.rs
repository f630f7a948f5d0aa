// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::{CategoryDto, Page, PostDto, PostListItemDto},
    queries::{
        categories::{GetCategoryBySlugQuery, ListCategoriesQuery},
        posts::{
            CategoryFeedDto, GetPublicPostQuery, ListCategoryPostsQuery, ListPublicPostsQuery,
        },
    },
};
use crate::domain::category::CategoryListScope;
use crate::presentation::http::controllers::DataBody;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PublicPostListParams {
    /// Category slug to narrow the listing to.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryPostsParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/public/posts",
    params(PublicPostListParams),
    responses(
        (status = 200, description = "One page of published posts, newest publication first.", body = Page<PostListItemDto>),
        (status = 422, description = "Malformed filter or pagination parameter.")
    ),
    tag = "Public"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublicPostListParams>,
) -> HttpResult<Json<Page<PostListItemDto>>> {
    state
        .services
        .post_queries
        .list_public_posts(ListPublicPostsQuery {
            category: params.category,
            search: params.search,
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/public/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug.")),
    responses(
        (status = 200, description = "The published post.", body = DataBody<PostDto>),
        (status = 404, description = "No published post under that slug.")
    ),
    tag = "Public"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<DataBody<PostDto>>> {
    state
        .services
        .post_queries
        .get_public_post(GetPublicPostQuery { slug })
        .await
        .into_http()
        .map(|data| Json(DataBody { data }))
}

#[utoipa::path(
    get,
    path = "/api/public/categories",
    responses(
        (status = 200, description = "Categories that have published posts, with published-post counts.", body = DataBody<Vec<CategoryDto>>)
    ),
    tag = "Public"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<DataBody<Vec<CategoryDto>>>> {
    state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            scope: CategoryListScope::PublishedOnly,
        })
        .await
        .into_http()
        .map(|data| Json(DataBody { data }))
}

#[utoipa::path(
    get,
    path = "/api/public/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug.")),
    responses(
        (status = 200, description = "The category.", body = DataBody<CategoryDto>),
        (status = 404, description = "No such category.")
    ),
    tag = "Public"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<DataBody<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(|data| Json(DataBody { data }))
}

#[utoipa::path(
    get,
    path = "/api/public/categories/{slug}/posts",
    params(
        ("slug" = String, Path, description = "Category slug."),
        CategoryPostsParams
    ),
    responses(
        (status = 200, description = "The category and one page of its published posts.", body = CategoryFeedDto),
        (status = 404, description = "No such category."),
        (status = 422, description = "Malformed filter or pagination parameter.")
    ),
    tag = "Public"
)]
pub async fn list_category_posts(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<CategoryPostsParams>,
) -> HttpResult<Json<CategoryFeedDto>> {
    state
        .services
        .post_queries
        .list_category_posts(ListCategoryPostsQuery {
            slug,
            search: params.search,
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(Json)
}
