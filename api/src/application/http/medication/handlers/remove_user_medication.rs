use axum::extract::{Path, State};
use pantrychef_core::domain::medication::ports::MedicationService;

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
    path = "/{medication_id}",
    tag = "user-medication",
    summary = "Unlink medication",
    params(
        ("medication_id" = String, Path, description = "Medication ID"),
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Medication not linked")
    ),
    security(("bearer" = []))
)]
pub async fn remove_user_medication(
    Path(medication_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .remove_user_medication(identity, medication_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new("Medication removed")))
}
