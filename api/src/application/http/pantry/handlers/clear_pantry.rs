use axum::extract::State;
use pantrychef_core::domain::pantry::ports::PantryService;
use tracing::info;

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
    path = "",
    tag = "pantry",
    summary = "Clear pantry",
    responses(
        (status = 200, body = MessageResponse)
    ),
    security(("bearer" = []))
)]
pub async fn clear_pantry(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MessageResponse>, ApiError> {
    let user_id = identity.id();
    let removed = state
        .service
        .clear_pantry(identity)
        .await
        .map_err(ApiError::from)?;
    info!(%user_id, removed, "pantry cleared");

    Ok(Response::OK(MessageResponse::new("Pantry cleared")))
}
