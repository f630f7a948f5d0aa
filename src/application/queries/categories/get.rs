// src/application/queries/categories/get.rs
use super::service::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct GetCategoryQuery {
    pub id: i64,
}

impl CategoryQueryService {
    pub async fn get_category(&self, query: GetCategoryQuery) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let posts_count = self.post_repo.count_by_category(id).await?;
        let mut dto = CategoryDto::from(category);
        dto.posts_count = Some(posts_count);
        Ok(dto)
    }
}
