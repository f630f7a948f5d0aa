// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{Page, PostDto, PostListItemDto},
    queries::posts::{GetPostQuery, ListPostsQuery},
};
use crate::presentation::http::controllers::{
    DataBody, MessageBody, StatusMessage, deserialize_some,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PostListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub status: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub excerpt: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub published_at: Option<Option<DateTime<Utc>>>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListParams),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "One page of posts, drafts included.", body = Page<PostListItemDto>),
        (status = 422, description = "Malformed filter or pagination parameter.")
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Page<PostListItemDto>>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            status: params.status,
            category_id: params.category_id,
            search: params.search,
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Post created.", body = MessageBody<PostDto>),
        (status = 409, description = "Slug conflict that survived the retry loop."),
        (status = 422, description = "Validation failure.")
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<MessageBody<PostDto>>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        excerpt: payload.excerpt,
        status: payload.status,
        category_id: payload.category_id,
        published_at: payload.published_at,
    };

    let created = state
        .services
        .post_commands
        .create_post(&actor, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Post created successfully".into(),
            data: created,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id.")),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The post.", body = DataBody<PostDto>),
        (status = 404, description = "No such post.")
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<DataBody<PostDto>>> {
    state
        .services
        .post_queries
        .get_post(GetPostQuery { id })
        .await
        .into_http()
        .map(|data| Json(DataBody { data }))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id.")),
    request_body = UpdatePostRequest,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Post updated.", body = MessageBody<PostDto>),
        (status = 404, description = "No such post."),
        (status = 409, description = "Slug conflict that survived the retry loop."),
        (status = 422, description = "Validation failure.")
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<MessageBody<PostDto>>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        excerpt: payload.excerpt,
        status: payload.status,
        category_id: payload.category_id,
        published_at: payload.published_at,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(|data| {
            Json(MessageBody {
                message: "Post updated successfully".into(),
                data,
            })
        })
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id.")),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Post deleted.", body = StatusMessage),
        (status = 404, description = "No such post.")
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusMessage>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusMessage {
        message: "Post deleted successfully".into(),
    }))
}
