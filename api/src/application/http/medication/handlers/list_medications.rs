use axum::extract::State;
use pantrychef_core::domain::medication::{entities::MedicationRecord, ports::MedicationService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/list",
    tag = "medication",
    summary = "List medications",
    description = "Predefined medications followed by the caller's custom ones.",
    responses(
        (status = 200, body = [MedicationRecord])
    ),
    security(("bearer" = []))
)]
pub async fn list_medications(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<MedicationRecord>>, ApiError> {
    let medications = state
        .service
        .list_medications(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(medications))
}
