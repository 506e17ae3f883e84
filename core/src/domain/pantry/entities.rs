use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, pantry::value_objects::AddPantryItemInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PantryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_name: String,
    pub quantity: Option<String>,
    pub notes: Option<String>,
    pub added_date: DateTime<Utc>,
}

impl PantryItem {
    pub fn new(user_id: Uuid, input: AddPantryItemInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            ingredient_name: input.ingredient_name.trim().to_lowercase(),
            quantity: input.quantity.filter(|q| !q.trim().is_empty()),
            notes: input.notes.filter(|n| !n.trim().is_empty()),
            added_date: now,
        }
    }
}
