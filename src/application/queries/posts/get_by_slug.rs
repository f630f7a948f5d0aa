// src/application/queries/posts/get_by_slug.rs
use super::service::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::ListScope, slug::Slug},
};

pub struct GetPublicPostQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Public single-post lookup. Drafts are indistinguishable from missing
    /// posts on this surface.
    pub async fn get_public_post(&self, query: GetPublicPostQuery) -> ApplicationResult<PostDto> {
        let slug = Slug::new(query.slug.trim())
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let listing = self
            .read_repo
            .find_by_slug(&slug, ListScope::Published)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(listing.into())
    }
}
