// src/application/commands/posts/create.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::service::{PostCommandService, normalize_excerpt};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostAuthorDto, PostCategoryDto, PostDto},
        error::ApplicationResult,
    },
    domain::{
        post::{NewPost, PostContent, PostStatus, PostTitle},
        slug::ResolvedSlug,
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub excerpt: Option<String>,
    pub status: String,
    pub category_id: Option<i64>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let excerpt = normalize_excerpt(command.excerpt)?;
        let status = PostStatus::parse(&command.status)?;
        let category = self.load_category(command.category_id).await?;
        let category_id = category.as_ref().map(|c| c.id);

        let now = self.clock.now();
        let published_at = match status {
            PostStatus::Published => Some(command.published_at.unwrap_or(now)),
            PostStatus::Draft => command.published_at,
        };

        let ResolvedSlug { base, candidate } = self
            .slug_resolver
            .resolve(
                self.read_repo.as_ref(),
                title.as_str(),
                command.slug.as_deref(),
                None,
            )
            .await?;

        let author_id = actor.id;
        let write_repo = Arc::clone(&self.write_repo);
        let created = self
            .slug_resolver
            .persist_with_retry(&base, candidate, move |slug| {
                let new_post = NewPost {
                    title: title.clone(),
                    slug,
                    content: content.clone(),
                    excerpt: excerpt.clone(),
                    status,
                    category_id,
                    author_id,
                    published_at,
                    created_at: now,
                    updated_at: now,
                };
                let write_repo = Arc::clone(&write_repo);
                async move { write_repo.insert(new_post).await }
            })
            .await?;

        let user = PostAuthorDto {
            id: actor.id.into(),
            name: actor.name.clone(),
        };
        let category = category.as_ref().map(PostCategoryDto::from);
        Ok(PostDto::from_parts(created, user, category))
    }
}
