use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, health_profile::value_objects::HealthProfileInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub age_range: Option<String>,
    pub activity_level: Option<String>,
    pub health_goals: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HealthProfile {
    /// Builds the replacement profile. `created_at` carries over from the profile being
    /// replaced, if any.
    pub fn new(
        user_id: Uuid,
        input: HealthProfileInput,
        previous_created_at: Option<DateTime<Utc>>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            conditions: clean_list(input.conditions),
            allergies: clean_list(input.allergies),
            dietary_restrictions: clean_list(input.dietary_restrictions),
            age_range: input.age_range.filter(|v| !v.trim().is_empty()),
            activity_level: input.activity_level.filter(|v| !v.trim().is_empty()),
            health_goals: clean_list(input.health_goals),
            created_at: previous_created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !cleaned.iter().any(|v| v == value) {
            cleaned.push(value.to_string());
        }
    }
    cleaned
}
