// src/application/commands/categories/delete.rs
use super::service::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Deleting is refused while posts still reference the category; the
    /// caller has to reassign or delete those posts first.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let posts_count = self.post_repo.count_by_category(id).await?;
        if posts_count > 0 {
            return Err(ApplicationError::validation(format!(
                "cannot delete category that has posts ({posts_count}); reassign or delete the posts first"
            )));
        }

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
