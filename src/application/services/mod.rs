// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, posts::PostCommandService,
            users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{categories::CategoryQueryService, posts::PostQueryService},
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
        slug::SlugResolver,
        user::UserRepository,
    },
};

/// Fully wired application layer. Construction is the single place where
/// repositories and ports meet the services that use them.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub user_commands: Arc<UserCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_resolver = Arc::new(SlugResolver::new(Arc::clone(&slugger), Arc::clone(&clock)));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&category_read_repo),
            Arc::clone(&slug_resolver),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&category_read_repo),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_resolver),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_read_repo),
            Arc::clone(&post_read_repo),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
        ));

        Self {
            post_commands,
            post_queries,
            category_commands,
            category_queries,
            user_commands,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
