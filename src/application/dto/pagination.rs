// src/application/dto/pagination.rs
use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl PageMeta {
    /// `last_page` is `ceil(total / per_page)` but never less than 1, so an
    /// empty collection still reports one (empty) page. A request past the
    /// last page keeps the true totals.
    pub fn new(request: PageRequest, total: u64) -> Self {
        let per_page = request.per_page();
        let last_page = total.div_ceil(u64::from(per_page)).max(1);
        Self {
            current_page: request.page(),
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
            per_page,
            total,
        }
    }
}

/// One page of a listing: the items under `data`, the pagination metadata
/// under `meta`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::new(request, 0),
        }
    }
}
