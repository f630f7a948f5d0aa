// src/application/queries/categories/service.rs
use std::sync::Arc;

use crate::domain::{category::CategoryReadRepository, post::PostReadRepository};

pub struct CategoryQueryService {
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
}

impl CategoryQueryService {
    pub fn new(
        read_repo: Arc<dyn CategoryReadRepository>,
        post_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            post_repo,
        }
    }
}
