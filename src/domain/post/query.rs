// src/domain/post/query.rs
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostStatus;

pub const SEARCH_MAX_LEN: usize = 255;

/// Which listing surface is asking. Decides the implicit scope filter and
/// the ordering key: admin listings see everything ordered by creation
/// time, public listings see only published posts ordered by publication
/// time. Ties break by id, descending, so repeated identical queries page
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    Admin,
    Published,
}

/// Optional, independently applicable filters over a post listing. All
/// supplied filters are combined with AND; the search term matches as a
/// case-insensitive substring in any of title, content, or excerpt.
#[derive(Debug, Clone)]
pub struct PostListFilter {
    pub scope: ListScope,
    pub status: Option<PostStatus>,
    pub category_id: Option<CategoryId>,
    pub search: Option<String>,
}

impl PostListFilter {
    pub fn admin() -> Self {
        Self {
            scope: ListScope::Admin,
            status: None,
            category_id: None,
            search: None,
        }
    }

    pub fn published() -> Self {
        Self {
            scope: ListScope::Published,
            status: None,
            category_id: None,
            search: None,
        }
    }
}

/// Normalise a raw search parameter: trim, drop empty values, and bound the
/// length the same way the request validation documents it.
pub fn normalize_search(raw: Option<String>) -> DomainResult<Option<String>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(term) => {
            if term.chars().count() > SEARCH_MAX_LEN {
                return Err(DomainError::Validation(format!(
                    "search may not be longer than {SEARCH_MAX_LEN} characters"
                )));
            }
            Ok(Some(term.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_trimmed_and_bounded() {
        assert_eq!(normalize_search(None).unwrap(), None);
        assert_eq!(normalize_search(Some("   ".into())).unwrap(), None);
        assert_eq!(
            normalize_search(Some("  rust  ".into())).unwrap(),
            Some("rust".to_owned())
        );
        assert!(normalize_search(Some("x".repeat(256))).is_err());
    }
}
