use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddPantryItemValidator {
    #[validate(length(min = 1, message = "ingredient_name is required"))]
    pub ingredient_name: String,

    #[serde(default)]
    pub quantity: Option<String>,

    /// Free text such as "soft" or "fresh".
    #[serde(default)]
    pub notes: Option<String>,
}
