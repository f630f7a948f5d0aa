// src/domain/post/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::post::value_objects::{PostContent, PostExcerpt, PostId, PostStatus, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::user::value_objects::{UserId, UserName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub status: PostStatus,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Visible on the public surface: published status with a concrete
    /// publication timestamp.
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published && self.published_at.is_some()
    }

    pub fn publish(&mut self, published_at: DateTime<Utc>, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_at = Some(published_at);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Draft;
        self.published_at = None;
        self.updated_at = now;
    }
}

/// Reference to the category a post belongs to, carried alongside read
/// results so responses can embed the category without a second lookup.
#[derive(Debug, Clone)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
}

/// A post joined with the display name of its author and its category
/// reference, as the read endpoints return it.
#[derive(Debug, Clone)]
pub struct PostListing {
    pub post: Post,
    pub author_name: UserName,
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub status: PostStatus,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub excerpt: Option<Option<PostExcerpt>>,
    pub category_id: Option<Option<CategoryId>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            category_id: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<PostExcerpt>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: PostStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            status,
            published_at,
        });
        self
    }

    /// Whether applying this update writes the slug column; decides if the
    /// write runs under the slug conflict retry loop.
    pub fn touches_slug(&self) -> bool {
        self.slug.is_some()
    }
}
