use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetIngredientsQuery {
    /// Exact category, e.g. `vegetables`.
    pub category: Option<String>,
    /// Case-insensitive substring of the ingredient name.
    pub search: Option<String>,
}
