mod get;
mod get_by_slug;
mod list;
mod public_list;
mod service;

pub use get::GetPostQuery;
pub use get_by_slug::GetPublicPostQuery;
pub use list::ListPostsQuery;
pub use public_list::{CategoryFeedDto, ListCategoryPostsQuery, ListPublicPostsQuery};
pub use service::PostQueryService;
