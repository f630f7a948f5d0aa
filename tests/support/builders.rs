// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use quillpress::domain::category::{Category, CategoryDescription, CategoryId, CategoryName};
use quillpress::domain::post::{Post, PostContent, PostExcerpt, PostId, PostStatus, PostTitle};
use quillpress::domain::slug::Slug;
use quillpress::domain::user::UserId;

use super::mocks::time::FIXED_NOW;

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    status: PostStatus,
    category_id: Option<i64>,
    author_id: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Post fixture: published a minute after the fixed epoch by default, slug
/// derived naively from the title.
pub fn post(id: i64, title: &str) -> PostBuilder {
    PostBuilder {
        id,
        title: title.to_owned(),
        slug: title.to_lowercase().replace(' ', "-"),
        content: format!("{title} body"),
        excerpt: None,
        status: PostStatus::Published,
        category_id: None,
        author_id: 1,
        published_at: Some(*FIXED_NOW + Duration::minutes(1)),
        created_at: *FIXED_NOW,
    }
}

impl PostBuilder {
    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_owned();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_owned();
        self
    }

    pub fn excerpt(mut self, excerpt: &str) -> Self {
        self.excerpt = Some(excerpt.to_owned());
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self.published_at = None;
        self
    }

    /// The broken-by-hand state a public listing must never leak: published
    /// status without a publication timestamp.
    pub fn published_without_timestamp(mut self) -> Self {
        self.status = PostStatus::Published;
        self.published_at = None;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            excerpt: self.excerpt.map(|e| PostExcerpt::new(e).unwrap()),
            status: self.status,
            category_id: self.category_id.map(|id| CategoryId::new(id).unwrap()),
            author_id: UserId::new(self.author_id).unwrap(),
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        slug: Slug::new(name.to_lowercase().replace(' ', "-")).unwrap(),
        description: Some(CategoryDescription::new(format!("{name} posts")).unwrap()),
        created_at: *FIXED_NOW,
        updated_at: *FIXED_NOW,
    }
}
