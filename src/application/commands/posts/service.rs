// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{Category, CategoryId, CategoryReadRepository},
        post::{PostExcerpt, PostReadRepository, PostWriteRepository},
        slug::SlugResolver,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        slug_resolver: Arc<SlugResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_resolver,
            clock,
        }
    }

    /// Resolve and referentially validate an optional category id.
    pub(super) async fn load_category(
        &self,
        id: Option<i64>,
    ) -> ApplicationResult<Option<Category>> {
        match id {
            None => Ok(None),
            Some(raw) => {
                let id = CategoryId::new(raw)?;
                let category = self.category_repo.find_by_id(id).await?.ok_or_else(|| {
                    ApplicationError::validation("the selected category does not exist")
                })?;
                Ok(Some(category))
            }
        }
    }
}

/// Empty excerpts are stored as absent, not as empty strings.
pub(super) fn normalize_excerpt(raw: Option<String>) -> ApplicationResult<Option<PostExcerpt>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => Ok(Some(PostExcerpt::new(value)?)),
    }
}
