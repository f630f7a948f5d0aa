// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, CategoryUpdate, CategoryWithCount, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugScope};
use async_trait::async_trait;

/// Which posts count towards a category listing. The public surface only
/// shows categories that have at least one published post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryListScope {
    All,
    PublishedOnly,
}

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait CategoryReadRepository: SlugScope {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// All categories ordered by name, with post counts per the scope. Under
    /// `PublishedOnly`, categories without a published post are omitted.
    async fn list(&self, scope: CategoryListScope) -> DomainResult<Vec<CategoryWithCount>>;
}
