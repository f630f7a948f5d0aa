pub mod auth;
pub mod categories;
pub mod pagination;
pub mod posts;

pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResponseDto, UserDto};
pub use categories::CategoryDto;
pub use pagination::{Page, PageMeta};
pub use posts::{PostAuthorDto, PostCategoryDto, PostDto, PostListItemDto};
