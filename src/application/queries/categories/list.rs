// src/application/queries/categories/list.rs
use super::service::CategoryQueryService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::CategoryListScope,
};

pub struct ListCategoriesQuery {
    pub scope: CategoryListScope,
}

impl CategoryQueryService {
    /// Categories ordered by name. The admin scope counts every post; the
    /// public scope counts published posts only and omits categories that
    /// have none.
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let entries = self.read_repo.list(query.scope).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
