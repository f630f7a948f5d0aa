// src/infrastructure/repositories/postgres_post.rs
use super::error::map_sqlx;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::post::{
    CategoryRef, ListScope, NewPost, Post, PostContent, PostExcerpt, PostId, PostListFilter,
    PostListing, PostReadRepository, PostStatus, PostTitle, PostUpdate, PostWriteRepository,
};
use crate::domain::slug::{Slug, SlugScope};
use crate::domain::user::value_objects::{UserId, UserName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ENTITY_COLUMNS: &str =
    "id, title, slug, content, excerpt, status, category_id, author_id, published_at, created_at, updated_at";

const LISTING_SELECT: &str = "SELECT p.id, p.title, p.slug, p.content, p.excerpt, p.status, \
     p.category_id, p.author_id, p.published_at, p.created_at, p.updated_at, \
     u.name AS author_name, c.name AS category_name, c.slug AS category_slug \
     FROM posts p \
     JOIN users u ON u.id = p.author_id \
     LEFT JOIN categories c ON c.id = p.category_id";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    status: String,
    category_id: Option<i64>,
    author_id: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            excerpt: row.excerpt.map(PostExcerpt::new).transpose()?,
            status: PostStatus::parse(&row.status)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            author_id: UserId::new(row.author_id)?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostListingRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    status: String,
    category_id: Option<i64>,
    author_id: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    category_name: Option<String>,
    category_slug: Option<String>,
}

impl TryFrom<PostListingRow> for PostListing {
    type Error = DomainError;

    fn try_from(row: PostListingRow) -> Result<Self, Self::Error> {
        let category = match (row.category_id, row.category_name, row.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(CategoryRef {
                id: CategoryId::new(id)?,
                name: CategoryName::new(name)?,
                slug: Slug::new(slug)?,
            }),
            _ => None,
        };

        let post = Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            excerpt: row.excerpt.map(PostExcerpt::new).transpose()?,
            status: PostStatus::parse(&row.status)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            author_id: UserId::new(row.author_id)?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok(PostListing {
            post,
            author_name: UserName::new(row.author_name)?,
            category,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            status,
            category_id,
            author_id,
            published_at,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, content, excerpt, status, category_id, author_id, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, slug, content, excerpt, status, category_id, author_id, published_at, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_ref().map(PostExcerpt::as_str))
        .bind(status.as_str())
        .bind(category_id.map(i64::from))
        .bind(i64::from(author_id))
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            category_id,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.map(String::from));
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }

        if let Some(state) = publish_state {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ENTITY_COLUMNS);

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    /// AND together the scope filter and whichever optional filters are set.
    /// The published scope goes first and is unconditional for the public
    /// surface; no later clause can widen it.
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostListFilter) {
        fn sep(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
            if *has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                *has_where = true;
            }
        }

        let mut has_where = false;

        if filter.scope == ListScope::Published {
            sep(builder, &mut has_where);
            builder.push("p.status = 'published' AND p.published_at IS NOT NULL");
        }

        if let Some(status) = filter.status {
            sep(builder, &mut has_where);
            builder.push("p.status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(category_id) = filter.category_id {
            sep(builder, &mut has_where);
            builder.push("p.category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            sep(builder, &mut has_where);
            builder.push("(p.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR p.content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR p.excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, scope: ListScope) {
        match scope {
            ListScope::Admin => builder.push(" ORDER BY p.created_at DESC, p.id DESC"),
            ListScope::Published => builder.push(" ORDER BY p.published_at DESC, p.id DESC"),
        };
    }
}

#[async_trait]
impl SlugScope for PostgresPostReadRepository {
    async fn slug_exists(&self, candidate: &str, exclude: Option<i64>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM posts WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(candidate)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostListing>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        builder.push(" WHERE p.id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<PostListingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PostListing::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        scope: ListScope,
    ) -> DomainResult<Option<PostListing>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        builder.push(" WHERE p.slug = ");
        builder.push_bind(slug.as_str().to_owned());
        if scope == ListScope::Published {
            builder.push(" AND p.status = 'published' AND p.published_at IS NOT NULL");
        }

        let row = builder
            .build_query_as::<PostListingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PostListing::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &PostListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<PostListing>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts p");
        Self::apply_conditions(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        Self::apply_conditions(&mut builder, filter);
        Self::apply_ordering(&mut builder, filter.scope);
        builder.push(" LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<PostListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let listings = rows
            .into_iter()
            .map(PostListing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((listings, u64::try_from(total).unwrap_or_default()))
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE category_id = $1")
                .bind(i64::from(category_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
