use axum::extract::State;
use pantrychef_core::domain::recipe::{entities::Recipe, ports::RecipeService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GenerateRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Generates a recipe from the submitted pantry items, taking the caller's linked medications and, when given, a health profile into account. The recipe is stored for the caller.",
    responses(
        (status = 201, body = Recipe),
        (status = 400, description = "No pantry items or invalid servings"),
        (status = 404, description = "Health profile not found"),
        (status = 502, description = "Recipe generation failed")
    ),
    request_body = GenerateRecipeValidator,
    security(("bearer" = []))
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(recipe))
}
