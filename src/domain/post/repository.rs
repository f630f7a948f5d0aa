// src/domain/post/repository.rs
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::post::entity::{NewPost, Post, PostListing, PostUpdate};
use crate::domain::post::query::{ListScope, PostListFilter};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::{Slug, SlugScope};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: SlugScope {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostListing>>;
    async fn find_by_slug(&self, slug: &Slug, scope: ListScope)
    -> DomainResult<Option<PostListing>>;
    /// One page of posts plus the total match count for the same filter.
    async fn list_page(
        &self,
        filter: &PostListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<PostListing>, u64)>;
    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;
}
