pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{CategoryRef, NewPost, Post, PostListing, PostUpdate, PublishStateUpdate};
pub use query::{ListScope, PostListFilter};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostContent, PostExcerpt, PostId, PostStatus, PostTitle};
