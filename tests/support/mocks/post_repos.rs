// tests/support/mocks/post_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use quillpress::domain::category::{Category, CategoryId};
use quillpress::domain::errors::{DomainError, DomainResult};
use quillpress::domain::pagination::PageRequest;
use quillpress::domain::post::{
    CategoryRef, ListScope, NewPost, Post, PostId, PostListFilter, PostListing,
    PostReadRepository, PostUpdate, PostWriteRepository,
};
use quillpress::domain::slug::{Slug, SlugScope};
use quillpress::domain::user::value_objects::UserName;

/// In-memory post store honouring the repository contract: slug uniqueness
/// enforced on write, filter/ordering/offset semantics on read. Writes can
/// be primed to fail with slug conflicts to exercise the retry loop.
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    categories: Mutex<HashMap<i64, Category>>,
    next_id: AtomicI64,
    forced_slug_conflicts: AtomicU32,
    write_attempts: AtomicU32,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            categories: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            forced_slug_conflicts: AtomicU32::new(0),
            write_attempts: AtomicU32::new(0),
        }
    }

    pub fn with_categories(categories: &[Category]) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.categories.lock().unwrap();
            for category in categories {
                map.insert(category.id.into(), category.clone());
            }
        }
        repo
    }

    /// Insert a pre-built post directly, bypassing the write contract.
    pub fn seed(&self, post: Post) {
        let id = i64::from(post.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.posts.lock().unwrap().push(post);
    }

    /// The next `count` slug-touching writes fail with a slug uniqueness
    /// violation, as if a concurrent writer won the race.
    pub fn force_slug_conflicts(&self, count: u32) {
        self.forced_slug_conflicts.store(count, Ordering::SeqCst);
    }

    pub fn write_attempts(&self) -> u32 {
        self.write_attempts.load(Ordering::SeqCst)
    }

    pub fn slugs(&self) -> Vec<String> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| post.slug.as_str().to_owned())
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| i64::from(post.id) == id)
            .cloned()
    }

    fn consume_forced_conflict(&self) -> bool {
        self.forced_slug_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn listing(&self, post: Post) -> PostListing {
        let categories = self.categories.lock().unwrap();
        let category = post
            .category_id
            .and_then(|id| categories.get(&i64::from(id)))
            .map(|category| CategoryRef {
                id: category.id,
                name: category.name.clone(),
                slug: category.slug.clone(),
            });
        let author_name =
            UserName::new(format!("user-{}", i64::from(post.author_id))).unwrap();
        PostListing {
            post,
            author_name,
            category,
        }
    }
}

fn matches_filter(post: &Post, filter: &PostListFilter) -> bool {
    if filter.scope == ListScope::Published && !post.is_published() {
        return false;
    }
    if let Some(status) = filter.status {
        if post.status != status {
            return false;
        }
    }
    if let Some(category_id) = filter.category_id {
        if post.category_id != Some(category_id) {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_excerpt = post
            .excerpt
            .as_ref()
            .is_some_and(|e| e.as_str().to_lowercase().contains(&needle));
        if !post.title.as_str().to_lowercase().contains(&needle)
            && !post.content.as_str().to_lowercase().contains(&needle)
            && !in_excerpt
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, new: NewPost) -> DomainResult<Post> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.consume_forced_conflict() {
            return Err(DomainError::UniqueViolation {
                column: "slug".into(),
            });
        }

        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|post| post.slug == new.slug) {
            return Err(DomainError::UniqueViolation {
                column: "slug".into(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id: PostId::new(id)?,
            title: new.title,
            slug: new.slug,
            content: new.content,
            excerpt: new.excerpt,
            status: new.status,
            category_id: new.category_id,
            author_id: new.author_id,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if update.slug.is_some() && self.consume_forced_conflict() {
            return Err(DomainError::UniqueViolation {
                column: "slug".into(),
            });
        }

        let mut posts = self.posts.lock().unwrap();
        if let Some(slug) = &update.slug {
            if posts
                .iter()
                .any(|post| post.slug == *slug && post.id != update.id)
            {
                return Err(DomainError::UniqueViolation {
                    column: "slug".into(),
                });
            }
        }

        let post = posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(state) = update.publish_state {
            post.status = state.status;
            post.published_at = state.published_at;
        }
        post.updated_at = update.updated_at;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugScope for InMemoryPostRepo {
    async fn slug_exists(&self, candidate: &str, exclude: Option<i64>) -> DomainResult<bool> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().any(|post| {
            post.slug.as_str() == candidate && Some(i64::from(post.id)) != exclude
        }))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostListing>> {
        let post = {
            let posts = self.posts.lock().unwrap();
            posts.iter().find(|post| post.id == id).cloned()
        };
        Ok(post.map(|post| self.listing(post)))
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        scope: ListScope,
    ) -> DomainResult<Option<PostListing>> {
        let post = {
            let posts = self.posts.lock().unwrap();
            posts
                .iter()
                .find(|post| {
                    post.slug == *slug
                        && (scope == ListScope::Admin || post.is_published())
                })
                .cloned()
        };
        Ok(post.map(|post| self.listing(post)))
    }

    async fn list_page(
        &self,
        filter: &PostListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<PostListing>, u64)> {
        let mut matches: Vec<Post> = {
            let posts = self.posts.lock().unwrap();
            posts
                .iter()
                .filter(|post| matches_filter(post, filter))
                .cloned()
                .collect()
        };

        match filter.scope {
            ListScope::Admin => matches.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
            }),
            ListScope::Published => matches.sort_by(|a, b| {
                b.published_at
                    .cmp(&a.published_at)
                    .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
            }),
        }

        let total = matches.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matches
            .into_iter()
            .skip(offset)
            .take(page.per_page() as usize)
            .map(|post| self.listing(post))
            .collect();

        Ok((items, total))
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .filter(|post| post.category_id == Some(category_id))
            .count() as u64)
    }
}
