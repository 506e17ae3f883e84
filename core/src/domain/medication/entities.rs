use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::text_map::TextMap, generate_timestamp};

/// A medication and its food interactions. Predefined records use stable slug ids
/// (`"warfarin"`), custom ones a UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicationRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub avoid_foods: Vec<String>,
    pub recommended_foods: Vec<String>,
    #[schema(value_type = Object)]
    pub vitamin_interactions: TextMap,
    pub is_custom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserMedication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub medication_id: String,
    pub medication_name: String,
    pub added_at: DateTime<Utc>,
}

impl UserMedication {
    pub fn new(user_id: Uuid, medication: &MedicationRecord) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            medication_id: medication.id.clone(),
            medication_name: medication.name.clone(),
            added_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecommendation {
    pub recommended_foods: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub vitamin_recommendations: Vec<String>,
    pub general_advice: String,
}
