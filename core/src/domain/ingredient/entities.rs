use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl Ingredient {
    /// Names are stored lowercase so lookups and duplicate checks are case-insensitive.
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: normalize_ingredient_name(name),
            category: category.trim().to_lowercase(),
        }
    }
}

pub fn normalize_ingredient_name(name: &str) -> String {
    name.trim().to_lowercase()
}
