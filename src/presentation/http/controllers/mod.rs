// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod categories;
pub mod posts;
pub mod public;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Single-resource envelope: the entity under `data`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DataBody<T> {
    pub data: T,
}

/// Mutation envelope: a human-readable `message` plus the entity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageBody<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusMessage {
    pub message: String,
}

/// Distinguishes an absent field from an explicit `null` in PATCH-style
/// payloads: wrap the field in a double `Option` and mark it with
/// `#[serde(default, deserialize_with = "deserialize_some")]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
