// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";

/// Translate sqlx failures into domain errors. Named constraints map to
/// specific error kinds; the slug uniqueness constraints in particular must
/// surface as a slug column violation so the resolver's retry loop can see
/// them.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG | CNT_CATEGORY_SLUG => DomainError::UniqueViolation {
                        column: "slug".into(),
                    },
                    CNT_USER_EMAIL => DomainError::UniqueViolation {
                        column: "email".into(),
                    },
                    CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_POST_CATEGORY => DomainError::NotFound("category not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
