// src/application/commands/posts/update.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::service::{PostCommandService, normalize_excerpt};
use crate::{
    application::{
        dto::{PostAuthorDto, PostCategoryDto, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        post::{PostContent, PostId, PostListing, PostStatus, PostTitle, PostUpdate},
        slug::ResolvedSlug,
    },
};

/// Field semantics: `None` leaves a field untouched; for the nullable fields
/// an explicit `Some(None)` clears the stored value.
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub status: Option<String>,
    pub category_id: Option<Option<i64>>,
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let listing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        let PostListing {
            post,
            author_name,
            category: current_category,
        } = listing;

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        let new_title = command.title.map(PostTitle::new).transpose()?;
        if let Some(title) = &new_title {
            update = update.with_title(title.clone());
        }
        if let Some(raw) = command.content {
            update = update.with_content(PostContent::new(raw)?);
        }
        if let Some(raw) = command.excerpt {
            update = update.with_excerpt(normalize_excerpt(raw)?);
        }

        let mut category_dto: Option<PostCategoryDto> = current_category.map(Into::into);
        if let Some(raw) = command.category_id {
            let category = self.load_category(raw).await?;
            category_dto = category.as_ref().map(PostCategoryDto::from);
            update = update.with_category(category.as_ref().map(|c| c.id));
        }

        update = self.apply_publish_transition(&post, command.status, command.published_at, now, update)?;

        // The slug is rewritten when one is requested explicitly, or when the
        // title changes without one; otherwise it stays untouched.
        let explicit = command.slug.as_deref();
        let resolved = if explicit.map(str::trim).filter(|s| !s.is_empty()).is_some()
            || new_title.is_some()
        {
            let title_in_effect = new_title.as_ref().unwrap_or(&post.title);
            Some(
                self.slug_resolver
                    .resolve(
                        self.read_repo.as_ref(),
                        title_in_effect.as_str(),
                        explicit,
                        Some(command.id),
                    )
                    .await?,
            )
        } else {
            None
        };

        let updated = match resolved {
            Some(ResolvedSlug { base, candidate }) => {
                let write_repo = Arc::clone(&self.write_repo);
                let template = update;
                self.slug_resolver
                    .persist_with_retry(&base, candidate, move |slug| {
                        let update = template.clone().with_slug(slug);
                        let write_repo = Arc::clone(&write_repo);
                        async move { write_repo.update(update).await }
                    })
                    .await?
            }
            None => self.write_repo.update(update).await?,
        };

        let user = PostAuthorDto {
            id: updated.author_id.into(),
            name: author_name.into(),
        };
        Ok(PostDto::from_parts(updated, user, category_dto))
    }

    fn apply_publish_transition(
        &self,
        post: &crate::domain::post::Post,
        status: Option<String>,
        published_at: Option<Option<DateTime<Utc>>>,
        now: DateTime<Utc>,
        update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        if let Some(raw) = status {
            let status = PostStatus::parse(&raw)?;
            let new_published_at = match (status, post.status) {
                // first publication stamps the clock unless the payload set one
                (PostStatus::Published, PostStatus::Draft) => {
                    Some(published_at.flatten().unwrap_or(now))
                }
                (PostStatus::Draft, PostStatus::Published) => None,
                _ => published_at.flatten().or(post.published_at),
            };
            return Ok(update.with_publish_state(status, new_published_at));
        }

        if let Some(published_at) = published_at {
            return Ok(update.with_publish_state(post.status, published_at));
        }

        Ok(update)
    }
}
