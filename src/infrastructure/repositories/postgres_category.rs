// src/infrastructure/repositories/postgres_category.rs
use super::error::map_sqlx;
use crate::domain::category::{
    Category, CategoryListScope, CategoryReadRepository, CategoryUpdate, CategoryWithCount,
    CategoryWriteRepository, NewCategory,
};
use crate::domain::category::value_objects::{CategoryDescription, CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugScope};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ENTITY_COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryWriteRepository {
    pool: PgPool,
}

impl PostgresCategoryWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCategoryReadRepository {
    pool: PgPool,
}

impl PostgresCategoryReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description.map(CategoryDescription::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    post_count: i64,
}

impl TryFrom<CategoryCountRow> for CategoryWithCount {
    type Error = DomainError;

    fn try_from(row: CategoryCountRow) -> Result<Self, Self::Error> {
        let post_count = u64::try_from(row.post_count).unwrap_or_default();
        let category = Category::try_from(CategoryRow {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;
        Ok(CategoryWithCount {
            category,
            post_count,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for PostgresCategoryWriteRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            description,
            created_at,
            updated_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, slug, description, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(CategoryDescription::as_str))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            description,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.map(String::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ENTITY_COLUMNS);

        let maybe_row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugScope for PostgresCategoryReadRepository {
    async fn slug_exists(&self, candidate: &str, exclude: Option<i64>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(candidate)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl CategoryReadRepository for PostgresCategoryReadRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self, scope: CategoryListScope) -> DomainResult<Vec<CategoryWithCount>> {
        let sql = match scope {
            CategoryListScope::All => {
                "SELECT c.id, c.name, c.slug, c.description, c.created_at, c.updated_at,
                        COUNT(p.id) AS post_count
                 FROM categories c
                 LEFT JOIN posts p ON p.category_id = c.id
                 GROUP BY c.id
                 ORDER BY c.name ASC, c.id ASC"
            }
            CategoryListScope::PublishedOnly => {
                "SELECT c.id, c.name, c.slug, c.description, c.created_at, c.updated_at,
                        COUNT(p.id) AS post_count
                 FROM categories c
                 LEFT JOIN posts p
                   ON p.category_id = c.id
                  AND p.status = 'published'
                  AND p.published_at IS NOT NULL
                 GROUP BY c.id
                 HAVING COUNT(p.id) > 0
                 ORDER BY c.name ASC, c.id ASC"
            }
        };

        let rows = sqlx::query_as::<_, CategoryCountRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(CategoryWithCount::try_from)
            .collect()
    }
}
