//! JSON column helpers shared across aggregates.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A JSON-stored list of foreign-key-style references.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct IdList(pub Vec<Uuid>);

impl IdList {
    pub fn contains(&self, id: Uuid) -> bool {
        self.0.contains(&id)
    }
}

/// A JSON-stored list of plain strings (grades, sections, subjects).
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|s| s == value)
    }
}
