pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, CategoryUpdate, CategoryWithCount, NewCategory};
pub use repository::{CategoryListScope, CategoryReadRepository, CategoryWriteRepository};
pub use value_objects::{CategoryDescription, CategoryId, CategoryName};
