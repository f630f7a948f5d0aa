// src/application/queries/posts/public_list.rs
use super::service::PostQueryService;
use crate::{
    application::{
        dto::{CategoryDto, Page, PageMeta, PostListItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::{CATEGORY_FEED_PER_PAGE, DEFAULT_PER_PAGE, PageRequest},
        post::query::{PostListFilter, normalize_search},
        slug::Slug,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public front-page listing. Only published posts are ever visible here;
/// the scope filter is fixed and cannot be widened by any parameter.
pub struct ListPublicPostsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Public per-category feed, addressed by the category's slug.
pub struct ListCategoryPostsQuery {
    pub slug: String,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryFeedDto {
    pub category: CategoryDto,
    pub data: Vec<PostListItemDto>,
    pub meta: PageMeta,
}

impl PostQueryService {
    pub async fn list_public_posts(
        &self,
        query: ListPublicPostsQuery,
    ) -> ApplicationResult<Page<PostListItemDto>> {
        let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE)?;

        let mut filter = PostListFilter::published();
        filter.search = normalize_search(query.search)?;

        // A category that does not resolve matches nothing, which is an
        // ordinary empty result rather than an error on this surface.
        if let Some(raw) = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let Ok(slug) = Slug::new(raw) else {
                return Ok(Page::empty(page));
            };
            match self.category_repo.find_by_slug(&slug).await? {
                Some(category) => filter.category_id = Some(category.id),
                None => return Ok(Page::empty(page)),
            }
        }

        let (rows, total) = self.read_repo.list_page(&filter, page).await?;
        let items = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(items, PageMeta::new(page, total)))
    }

    pub async fn list_category_posts(
        &self,
        query: ListCategoryPostsQuery,
    ) -> ApplicationResult<CategoryFeedDto> {
        let slug = Slug::new(query.slug.trim())
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let page = PageRequest::new(query.page, query.per_page, CATEGORY_FEED_PER_PAGE)?;

        let mut filter = PostListFilter::published();
        filter.category_id = Some(category.id);
        filter.search = normalize_search(query.search)?;

        let (rows, total) = self.read_repo.list_page(&filter, page).await?;
        Ok(CategoryFeedDto {
            category: category.into(),
            data: rows.into_iter().map(Into::into).collect(),
            meta: PageMeta::new(page, total),
        })
    }
}
