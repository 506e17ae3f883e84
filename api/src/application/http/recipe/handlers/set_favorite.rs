use axum::extract::{Path, Query, State};
use pantrychef_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::SetFavoriteQuery,
        server::{
            api_entities::{
                api_error::ApiError,
                response::{MessageResponse, Response},
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{recipe_id}/favorite",
    tag = "recipe",
    summary = "Set favorite flag",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
        SetFavoriteQuery,
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn set_favorite(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<SetFavoriteQuery>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .set_favorite(identity, recipe_id, query.is_favorite)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new("Favorite status updated")))
}
