use crate::domain::common::entities::text_map::TextMap;

pub const DEFAULT_MEDICATION_CATEGORY: &str = "other";

#[derive(Debug, Clone)]
pub struct CreateCustomMedicationInput {
    pub name: String,
    pub category: Option<String>,
    pub avoid_foods: Vec<String>,
    pub recommended_foods: Vec<String>,
    pub vitamin_interactions: TextMap,
}
