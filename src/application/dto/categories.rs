// src/application/dto/categories.rs
use crate::domain::category::{Category, CategoryWithCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present on listing and show responses; which posts were counted
    /// depends on the surface (all for admin, published for public).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.into(),
            description: category.description.map(Into::into),
            posts_count: None,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<CategoryWithCount> for CategoryDto {
    fn from(entry: CategoryWithCount) -> Self {
        let mut dto = Self::from(entry.category);
        dto.posts_count = Some(entry.post_count);
        dto
    }
}
