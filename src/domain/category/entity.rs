// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryDescription, CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<CategoryDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<CategoryDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category joined with the number of posts it holds, as the listing
/// endpoints return it. Which posts are counted depends on the listing
/// scope the repository was asked for.
#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub category: Category,
    pub post_count: u64,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<Slug>,
    pub description: Option<Option<CategoryDescription>>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<CategoryDescription>) -> Self {
        self.description = Some(description);
        self
    }
}
