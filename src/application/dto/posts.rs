// src/application/dto/posts.rs
use crate::domain::category::Category;
use crate::domain::post::{CategoryRef, Post, PostListing, PostStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostAuthorDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostCategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<CategoryRef> for PostCategoryDto {
    fn from(category: CategoryRef) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.into(),
        }
    }
}

impl From<&Category> for PostCategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.as_str().to_owned(),
            slug: category.slug.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub user: PostAuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategoryDto>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_parts(
        post: Post,
        user: PostAuthorDto,
        category: Option<PostCategoryDto>,
    ) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            content: post.content.into(),
            excerpt: post.excerpt.map(Into::into),
            status: post.status,
            category_id: post.category_id.map(Into::into),
            user,
            category,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostListing> for PostDto {
    fn from(listing: PostListing) -> Self {
        let user = PostAuthorDto {
            id: listing.post.author_id.into(),
            name: listing.author_name.into(),
        };
        let category = listing.category.map(Into::into);
        Self::from_parts(listing.post, user, category)
    }
}

/// Listing rows skip the full body; clients fetch it with the single-post
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListItemDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub user: PostAuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategoryDto>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostListing> for PostListItemDto {
    fn from(listing: PostListing) -> Self {
        let user = PostAuthorDto {
            id: listing.post.author_id.into(),
            name: listing.author_name.into(),
        };
        let category = listing.category.map(Into::into);
        let post = listing.post;
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            excerpt: post.excerpt.map(Into::into),
            status: post.status,
            category_id: post.category_id.map(Into::into),
            user,
            category,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
