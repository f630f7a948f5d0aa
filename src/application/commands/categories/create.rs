// src/application/commands/categories/create.rs
use std::sync::Arc;

use super::service::{CategoryCommandService, normalize_description};
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{
        category::{CategoryName, NewCategory},
        slug::ResolvedSlug,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let description = normalize_description(command.description)?;
        let now = self.clock.now();

        let ResolvedSlug { base, candidate } = self
            .slug_resolver
            .resolve(
                self.read_repo.as_ref(),
                name.as_str(),
                command.slug.as_deref(),
                None,
            )
            .await?;

        let write_repo = Arc::clone(&self.write_repo);
        let created = self
            .slug_resolver
            .persist_with_retry(&base, candidate, move |slug| {
                let new_category = NewCategory {
                    name: name.clone(),
                    slug,
                    description: description.clone(),
                    created_at: now,
                    updated_at: now,
                };
                let write_repo = Arc::clone(&write_repo);
                async move { write_repo.insert(new_category).await }
            })
            .await?;

        Ok(created.into())
    }
}
