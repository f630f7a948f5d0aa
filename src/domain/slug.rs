// src/domain/slug.rs
use std::future::Future;
use std::sync::Arc;
use std::fmt;

use async_trait::async_trait;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};

pub const SLUG_MAX_LEN: usize = 255;

/// Total persistence attempts before a slug conflict is surfaced to the
/// caller: the probed candidate plus two timestamp-salted fallbacks.
pub const MAX_PERSIST_ATTEMPTS: u32 = 3;

/// URL-safe identifier: lowercase alphanumeric runs separated by single
/// hyphens, no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > SLUG_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "slug may not be longer than {SLUG_MAX_LEN} characters"
            )));
        }
        if !is_well_formed(&value) {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, numbers, and hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

fn is_well_formed(value: &str) -> bool {
    value.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

/// Outcome of slug resolution: the candidate to persist, plus the base it
/// was built from, which the retry loop uses when salting a replacement.
#[derive(Debug, Clone)]
pub struct ResolvedSlug {
    pub base: Slug,
    pub candidate: Slug,
}

/// Point-in-time existence probe over one entity kind's slug namespace.
/// `exclude` is the id of the entity being updated, so a record never
/// collides with its own slug.
#[async_trait]
pub trait SlugScope: Send + Sync {
    async fn slug_exists(&self, candidate: &str, exclude: Option<i64>) -> DomainResult<bool>;
}

/// Domain service producing unique slugs for sluggable entities.
///
/// Resolution is two-tiered. A sequential probe (`base`, `base-2`,
/// `base-3`, ...) yields the lowest free suffix at check time, which keeps
/// slugs human friendly. The probe is only as fresh as the check, so the
/// write path runs under [`SlugResolver::persist_with_retry`], which reacts
/// to a storage-level uniqueness violation by salting the candidate with the
/// current unix timestamp and the attempt number.
pub struct SlugResolver {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl SlugResolver {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    /// Derive a slug candidate from human text. May return the empty string
    /// for degenerate input (punctuation-only titles); `Slug::new` rejects
    /// that later.
    pub fn derive(&self, text: &str) -> String {
        self.generator.slugify(text)
    }

    /// Pick the slug for a create or update: an explicitly requested slug is
    /// validated and checked for availability as-is, otherwise a candidate is
    /// derived from the display text and probed for the lowest free suffix.
    /// The returned base is what the retry loop salts on conflict.
    pub async fn resolve(
        &self,
        scope: &dyn SlugScope,
        display_text: &str,
        requested: Option<&str>,
        exclude: Option<i64>,
    ) -> DomainResult<ResolvedSlug> {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(explicit) => {
                let slug = Slug::new(explicit)?;
                if scope.slug_exists(slug.as_str(), exclude).await? {
                    return Err(DomainError::Validation(
                        "this slug is already taken".into(),
                    ));
                }
                Ok(ResolvedSlug {
                    base: slug.clone(),
                    candidate: slug,
                })
            }
            None => {
                let base = Slug::new(self.derive(display_text))?;
                let candidate = self.resolve_unique(scope, base.as_str(), exclude).await?;
                Ok(ResolvedSlug { base, candidate })
            }
        }
    }

    /// Sequential probe. The first taker keeps the bare base slug; later
    /// entities with the same base get `-2`, `-3`, and so on.
    pub async fn resolve_unique(
        &self,
        scope: &dyn SlugScope,
        base: &str,
        exclude: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = Slug::new(base)?;
        let mut candidate = base.as_str().to_owned();
        let mut suffix = 2u64;
        while scope.slug_exists(&candidate, exclude).await? {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        Slug::new(candidate)
    }

    /// Run the persistence write with a bounded retry on slug conflicts.
    ///
    /// The probe in [`SlugResolver::resolve_unique`] and the later write are
    /// not atomic: a concurrent writer can take the candidate in between, and
    /// the storage unique constraint is the authority. When the write fails
    /// with a uniqueness violation on the slug column, the candidate is
    /// replaced by `{base}-{unix_timestamp}-{attempt}` and the write retried,
    /// up to [`MAX_PERSIST_ATTEMPTS`] total attempts. Two salted values can
    /// still collide within the same second; the guarantee is probabilistic,
    /// and an exhausted loop propagates the final conflict. Any error other
    /// than a slug uniqueness violation propagates immediately.
    pub async fn persist_with_retry<T, F, Fut>(
        &self,
        base: &Slug,
        initial: Slug,
        mut persist: F,
    ) -> DomainResult<T>
    where
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        let mut candidate = initial;
        let mut attempt = 1u32;
        loop {
            match persist(candidate).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_slug_conflict() && attempt < MAX_PERSIST_ATTEMPTS => {
                    let salt = self.clock.now().timestamp();
                    candidate = Slug::new(format!("{base}-{salt}-{attempt}"))?;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct PassthroughGenerator;

    impl SlugGenerator for PassthroughGenerator {
        fn slugify(&self, input: &str) -> String {
            input.to_lowercase().replace(' ', "-")
        }
    }

    struct TakenSlugs {
        taken: Mutex<HashSet<(String, Option<i64>)>>,
    }

    impl TakenSlugs {
        fn new(entries: &[(&str, i64)]) -> Self {
            Self {
                taken: Mutex::new(
                    entries
                        .iter()
                        .map(|(slug, id)| ((*slug).to_owned(), Some(*id)))
                        .collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl SlugScope for TakenSlugs {
        async fn slug_exists(&self, candidate: &str, exclude: Option<i64>) -> DomainResult<bool> {
            let taken = self.taken.lock().unwrap();
            Ok(taken
                .iter()
                .any(|(slug, owner)| slug == candidate && *owner != exclude))
        }
    }

    fn resolver() -> SlugResolver {
        SlugResolver::new(
            Arc::new(PassthroughGenerator),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())),
        )
    }

    #[test]
    fn slug_accepts_well_formed_values() {
        for value in ["a", "hello-world", "post-2", "a1-b2-c3"] {
            assert!(Slug::new(value).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn slug_rejects_malformed_values() {
        for value in ["", "-a", "a-", "a--b", "Hello", "héllo", "a_b", "a b"] {
            assert!(Slug::new(value).is_err(), "{value} should be rejected");
        }
    }

    #[tokio::test]
    async fn first_taker_keeps_bare_base() {
        let scope = TakenSlugs::new(&[]);
        let slug = resolver()
            .resolve_unique(&scope, "test-post", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "test-post");
    }

    #[tokio::test]
    async fn probe_suffixes_start_at_two() {
        let scope = TakenSlugs::new(&[("test-post", 1)]);
        let slug = resolver()
            .resolve_unique(&scope, "test-post", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "test-post-2");

        let scope = TakenSlugs::new(&[("test-post", 1), ("test-post-2", 2)]);
        let slug = resolver()
            .resolve_unique(&scope, "test-post", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "test-post-3");
    }

    #[tokio::test]
    async fn probe_ignores_the_excluded_entity() {
        let scope = TakenSlugs::new(&[("test-post", 7)]);
        let slug = resolver()
            .resolve_unique(&scope, "test-post", Some(7))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "test-post");
    }

    #[tokio::test]
    async fn explicit_slug_is_validated_and_checked() {
        let scope = TakenSlugs::new(&[("taken", 1)]);
        let resolver = resolver();

        let resolved = resolver
            .resolve(&scope, "Some Title", Some("custom-slug"), None)
            .await
            .unwrap();
        assert_eq!(resolved.candidate.as_str(), "custom-slug");
        assert_eq!(resolved.base.as_str(), "custom-slug");

        let err = resolver
            .resolve(&scope, "Some Title", Some("taken"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = resolver
            .resolve(&scope, "Some Title", Some("Not A Slug"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn derived_resolution_keeps_base_for_salting() {
        let scope = TakenSlugs::new(&[("some-title", 1)]);
        let resolved = resolver()
            .resolve(&scope, "Some Title", None, None)
            .await
            .unwrap();
        assert_eq!(resolved.base.as_str(), "some-title");
        assert_eq!(resolved.candidate.as_str(), "some-title-2");
    }

    #[tokio::test]
    async fn degenerate_base_is_rejected() {
        let scope = TakenSlugs::new(&[]);
        let err = resolver()
            .resolve_unique(&scope, "", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn retry_salts_candidate_and_stops_after_three_attempts() {
        let resolver = resolver();
        let base = Slug::new("test-post").unwrap();
        let calls = AtomicU32::new(0);

        let result = resolver
            .persist_with_retry(&base, base.clone(), |candidate| {
                let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt < 3 {
                        Err(DomainError::UniqueViolation {
                            column: "slug".into(),
                        })
                    } else {
                        Ok(candidate)
                    }
                }
            })
            .await
            .unwrap();

        let expected_salt = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .timestamp();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(result.as_str(), format!("test-post-{expected_salt}-2"));
    }

    #[tokio::test]
    async fn retry_gives_up_after_max_attempts() {
        let resolver = resolver();
        let base = Slug::new("test-post").unwrap();
        let calls = AtomicU32::new(0);

        let err = resolver
            .persist_with_retry::<Slug, _, _>(&base, base.clone(), |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(DomainError::UniqueViolation {
                        column: "slug".into(),
                    })
                }
            })
            .await
            .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), MAX_PERSIST_ATTEMPTS);
        assert!(err.is_slug_conflict());
    }

    #[tokio::test]
    async fn retry_does_not_touch_other_errors() {
        let resolver = resolver();
        let base = Slug::new("test-post").unwrap();
        let calls = AtomicU32::new(0);

        let err = resolver
            .persist_with_retry::<Slug, _, _>(&base, base.clone(), |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(DomainError::Persistence("connection reset".into())) }
            })
            .await
            .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
