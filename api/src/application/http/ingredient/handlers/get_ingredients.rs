use axum::extract::{Query, State};
use pantrychef_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::GetIngredientsFilter,
};

use crate::application::http::{
    ingredient::validators::GetIngredientsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    description = "Lists the ingredient catalog, optionally narrowed by category and a name search.",
    params(GetIngredientsQuery),
    responses(
        (status = 200, body = [Ingredient])
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(query): Query<GetIngredientsQuery>,
) -> Result<Response<Vec<Ingredient>>, ApiError> {
    let ingredients = state
        .service
        .get_ingredients(GetIngredientsFilter {
            category: query.category,
            search: query.search,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ingredients))
}
