use pantrychef_core::domain::recipe::value_objects::RecipeRequest;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[validate(length(min = 1, message = "No pantry items provided"))]
    pub pantry_items: Vec<String>,

    /// vegan, vegetarian, pescatarian, flexitarian, carnivorous, ...
    pub dietary_preference: String,

    #[serde(default)]
    pub meal_type: Option<String>,

    #[serde(default)]
    pub dish_type: Option<String>,

    #[serde(default)]
    pub diet_type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "Servings must be between 1 and 50"))]
    pub servings: Option<u32>,

    #[serde(default)]
    pub health_profile_id: Option<Uuid>,
}

impl From<GenerateRecipeValidator> for RecipeRequest {
    fn from(payload: GenerateRecipeValidator) -> Self {
        Self {
            pantry_items: payload.pantry_items,
            dietary_preference: payload.dietary_preference,
            meal_type: payload.meal_type,
            dish_type: payload.dish_type,
            diet_type: payload.diet_type,
            servings: payload.servings,
            health_profile_id: payload.health_profile_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddRatingValidator {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[serde(default)]
    pub review: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesQuery {
    #[serde(default)]
    pub favorites_only: bool,
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SetFavoriteQuery {
    pub is_favorite: bool,
}
