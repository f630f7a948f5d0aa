// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PER_PAGE: u32 = 10;
/// The public per-category feed pages in dozens, matching the grid the
/// category browsing views render.
pub const CATEGORY_FEED_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 100;

/// A validated offset-pagination request. `page` is 1-based and `per_page`
/// is bounded to 1..=100; the endpoint supplies its own default page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(
        page: Option<u32>,
        per_page: Option<u32>,
        default_per_page: u32,
    ) -> DomainResult<Self> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }

        let per_page = per_page.unwrap_or(default_per_page);
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(DomainError::Validation(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }

        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}
