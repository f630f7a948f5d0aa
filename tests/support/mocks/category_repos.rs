// tests/support/mocks/category_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use quillpress::domain::category::{
    Category, CategoryId, CategoryListScope, CategoryReadRepository, CategoryUpdate,
    CategoryWithCount, CategoryWriteRepository, NewCategory,
};
use quillpress::domain::errors::{DomainError, DomainResult};
use quillpress::domain::slug::{Slug, SlugScope};

#[derive(Default, Clone, Copy)]
pub struct PostCounts {
    pub all: u64,
    pub published: u64,
}

pub struct InMemoryCategoryRepo {
    categories: Mutex<Vec<Category>>,
    counts: Mutex<HashMap<i64, PostCounts>>,
    next_id: AtomicI64,
    forced_slug_conflicts: AtomicU32,
    write_attempts: AtomicU32,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            counts: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            forced_slug_conflicts: AtomicU32::new(0),
            write_attempts: AtomicU32::new(0),
        }
    }

    pub fn with_categories(categories: &[Category]) -> Self {
        let repo = Self::new();
        for category in categories {
            repo.seed(category.clone());
        }
        repo
    }

    pub fn seed(&self, category: Category) {
        let id = i64::from(category.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.categories.lock().unwrap().push(category);
    }

    pub fn set_post_counts(&self, id: i64, counts: PostCounts) {
        self.counts.lock().unwrap().insert(id, counts);
    }

    pub fn force_slug_conflicts(&self, count: u32) {
        self.forced_slug_conflicts.store(count, Ordering::SeqCst);
    }

    pub fn write_attempts(&self) -> u32 {
        self.write_attempts.load(Ordering::SeqCst)
    }

    pub fn slugs(&self) -> Vec<String> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .map(|category| category.slug.as_str().to_owned())
            .collect()
    }

    fn consume_forced_conflict(&self) -> bool {
        self.forced_slug_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepo {
    async fn insert(&self, new: NewCategory) -> DomainResult<Category> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.consume_forced_conflict() {
            return Err(DomainError::UniqueViolation {
                column: "slug".into(),
            });
        }

        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|category| category.slug == new.slug) {
            return Err(DomainError::UniqueViolation {
                column: "slug".into(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let category = Category {
            id: CategoryId::new(id)?,
            name: new.name,
            slug: new.slug,
            description: new.description,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        let mut categories = self.categories.lock().unwrap();
        if let Some(slug) = &update.slug {
            if categories
                .iter()
                .any(|category| category.slug == *slug && category.id != update.id)
            {
                return Err(DomainError::UniqueViolation {
                    column: "slug".into(),
                });
            }
        }

        let category = categories
            .iter_mut()
            .find(|category| category.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = description;
        }
        category.updated_at = update.updated_at;

        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|category| category.id != id);
        if categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugScope for InMemoryCategoryRepo {
    async fn slug_exists(&self, candidate: &str, exclude: Option<i64>) -> DomainResult<bool> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().any(|category| {
            category.slug.as_str() == candidate && Some(i64::from(category.id)) != exclude
        }))
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|category| category.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .find(|category| category.slug == *slug)
            .cloned())
    }

    async fn list(&self, scope: CategoryListScope) -> DomainResult<Vec<CategoryWithCount>> {
        let categories = self.categories.lock().unwrap();
        let counts = self.counts.lock().unwrap();

        let mut entries: Vec<CategoryWithCount> = categories
            .iter()
            .filter_map(|category| {
                let id = i64::from(category.id);
                let count = counts.get(&id).copied().unwrap_or_default();
                match scope {
                    CategoryListScope::All => Some(CategoryWithCount {
                        category: category.clone(),
                        post_count: count.all,
                    }),
                    CategoryListScope::PublishedOnly if count.published > 0 => {
                        Some(CategoryWithCount {
                            category: category.clone(),
                            post_count: count.published,
                        })
                    }
                    CategoryListScope::PublishedOnly => None,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            a.category
                .name
                .as_str()
                .cmp(b.category.name.as_str())
                .then_with(|| i64::from(a.category.id).cmp(&i64::from(b.category.id)))
        });

        Ok(entries)
    }
}
