use pantrychef_core::domain::health_profile::value_objects::HealthProfileInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct HealthProfileValidator {
    #[serde(default)]
    pub conditions: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub age_range: Option<String>,

    #[serde(default)]
    pub activity_level: Option<String>,

    #[serde(default)]
    pub health_goals: Vec<String>,
}

impl From<HealthProfileValidator> for HealthProfileInput {
    fn from(payload: HealthProfileValidator) -> Self {
        Self {
            conditions: payload.conditions,
            allergies: payload.allergies,
            dietary_restrictions: payload.dietary_restrictions,
            age_range: payload.age_range,
            activity_level: payload.activity_level,
            health_goals: payload.health_goals,
        }
    }
}
