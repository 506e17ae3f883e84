use axum::extract::{Path, State};
use pantrychef_core::domain::recipe::{entities::RecipeRating, ports::RecipeService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{recipe_id}/ratings",
    tag = "recipe",
    summary = "List recipe ratings",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = [RecipeRating]),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_ratings(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<RecipeRating>>, ApiError> {
    let ratings = state
        .service
        .get_ratings(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ratings))
}
