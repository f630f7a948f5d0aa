pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewAccessToken, User};
pub use repository::{AccessTokenRepository, UserRepository};
pub use value_objects::{Email, PasswordHash, UserId, UserName};
