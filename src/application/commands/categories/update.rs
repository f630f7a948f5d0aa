// src/application/commands/categories/update.rs
use super::service::{CategoryCommandService, normalize_description};
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let now = self.clock.now();
        let mut update = CategoryUpdate::new(id, now);

        let new_name = command.name.map(CategoryName::new).transpose()?;
        if let Some(name) = &new_name {
            update = update.with_name(name.clone());
        }
        if let Some(raw) = command.description {
            update = update.with_description(normalize_description(raw)?);
        }

        let explicit = command.slug.as_deref();
        if explicit.map(str::trim).filter(|s| !s.is_empty()).is_some() || new_name.is_some() {
            let name_in_effect = new_name.as_ref().unwrap_or(&category.name);
            let resolved = self
                .slug_resolver
                .resolve(
                    self.read_repo.as_ref(),
                    name_in_effect.as_str(),
                    explicit,
                    Some(command.id),
                )
                .await?;
            update = update.with_slug(resolved.candidate);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
