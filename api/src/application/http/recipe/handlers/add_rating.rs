use axum::extract::{Path, State};
use pantrychef_core::domain::recipe::{
    entities::RecipeRating, ports::RecipeService, value_objects::AddRatingInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::AddRatingValidator,
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
    path = "/{recipe_id}/ratings",
    tag = "recipe",
    summary = "Rate recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 201, body = RecipeRating),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Recipe not found")
    ),
    request_body = AddRatingValidator,
    security(("bearer" = []))
)]
pub async fn add_rating(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddRatingValidator>,
) -> Result<Response<RecipeRating>, ApiError> {
    let rating = state
        .service
        .add_rating(
            identity,
            recipe_id,
            AddRatingInput {
                rating: payload.rating,
                review: payload.review,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(rating))
}
