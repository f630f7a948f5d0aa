// src/application/queries/posts/list.rs
use super::service::PostQueryService;
use crate::{
    application::{
        dto::{Page, PageMeta, PostListItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        pagination::{DEFAULT_PER_PAGE, PageRequest},
        post::{
            PostStatus,
            query::{PostListFilter, normalize_search},
        },
    },
};

/// Admin listing over all posts, drafts included.
pub struct ListPostsQuery {
    pub status: Option<String>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<Page<PostListItemDto>> {
        let status = query
            .status
            .as_deref()
            .map(PostStatus::parse)
            .transpose()?;

        let category_id = match query.category_id {
            None => None,
            Some(raw) => {
                let id = CategoryId::new(raw)?;
                self.category_repo.find_by_id(id).await?.ok_or_else(|| {
                    ApplicationError::validation("the selected category does not exist")
                })?;
                Some(id)
            }
        };

        let mut filter = PostListFilter::admin();
        filter.status = status;
        filter.category_id = category_id;
        filter.search = normalize_search(query.search)?;

        let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE)?;
        let (rows, total) = self.read_repo.list_page(&filter, page).await?;
        let items = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(items, PageMeta::new(page, total)))
    }
}
