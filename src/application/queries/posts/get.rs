// src/application/queries/posts/get.rs
use super::service::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)?;
        let listing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(listing.into())
    }
}
