use pantrychef_core::domain::{
    common::entities::text_map::TextMap,
    medication::value_objects::CreateCustomMedicationInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomMedicationValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub avoid_foods: Vec<String>,

    #[serde(default)]
    pub recommended_foods: Vec<String>,

    /// Nutrient name to advice, e.g. `{"vitamin_k": "Keep intake consistent"}`.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub vitamin_interactions: TextMap,
}

impl From<CreateCustomMedicationValidator> for CreateCustomMedicationInput {
    fn from(payload: CreateCustomMedicationValidator) -> Self {
        Self {
            name: payload.name,
            category: payload.category,
            avoid_foods: payload.avoid_foods,
            recommended_foods: payload.recommended_foods,
            vitamin_interactions: payload.vitamin_interactions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddUserMedicationQuery {
    /// Predefined slug such as `warfarin`, or the id of a custom medication.
    pub medication_id: String,
}
