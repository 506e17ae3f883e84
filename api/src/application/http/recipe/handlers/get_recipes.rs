use axum::extract::{Query, State};
use pantrychef_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipesFilter,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GetRecipesQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "The caller's recipes, newest first, at most 100.",
    params(GetRecipesQuery),
    responses(
        (status = 200, body = [Recipe])
    ),
    security(("bearer" = []))
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<GetRecipesQuery>,
) -> Result<Response<Vec<Recipe>>, ApiError> {
    let recipes = state
        .service
        .get_recipes(
            identity,
            GetRecipesFilter {
                favorites_only: query.favorites_only,
                ..Default::default()
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipes))
}
