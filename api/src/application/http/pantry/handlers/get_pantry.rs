use axum::extract::State;
use pantrychef_core::domain::pantry::{entities::PantryItem, ports::PantryService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "pantry",
    summary = "List pantry items",
    responses(
        (status = 200, body = [PantryItem])
    ),
    security(("bearer" = []))
)]
pub async fn get_pantry(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<PantryItem>>, ApiError> {
    let items = state
        .service
        .get_pantry(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(items))
}
