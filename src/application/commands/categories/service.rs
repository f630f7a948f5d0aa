// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        category::{CategoryDescription, CategoryReadRepository, CategoryWriteRepository},
        post::PostReadRepository,
        slug::SlugResolver,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        slug_resolver: Arc<SlugResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            post_repo,
            slug_resolver,
            clock,
        }
    }
}

pub(super) fn normalize_description(
    raw: Option<String>,
) -> ApplicationResult<Option<CategoryDescription>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => Ok(Some(CategoryDescription::new(value)?)),
    }
}
