use axum::extract::{Path, State};
use pantrychef_core::domain::pantry::ports::PantryService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::ApiError,
            response::{MessageResponse, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Remove pantry item",
    params(
        ("item_id" = Uuid, Path, description = "Pantry item ID"),
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Item not found")
    ),
    security(("bearer" = []))
)]
pub async fn remove_pantry_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .remove_pantry_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new("Item removed from pantry")))
}
