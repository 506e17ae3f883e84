use axum::extract::State;
use pantrychef_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::CreateIngredientInput,
};

use crate::application::http::{
    ingredient::validators::CreateIngredientValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create ingredient",
    description = "Adds an ingredient to the shared catalog. Names are stored lowercase.",
    responses(
        (status = 200, body = Ingredient),
        (status = 409, description = "Ingredient already exists")
    ),
    request_body = CreateIngredientValidator
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<Ingredient>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(CreateIngredientInput {
            name: payload.name,
            category: payload.category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ingredient))
}
