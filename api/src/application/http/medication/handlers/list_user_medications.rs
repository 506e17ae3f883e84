use axum::extract::State;
use pantrychef_core::domain::medication::{entities::UserMedication, ports::MedicationService};

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
    tag = "user-medication",
    summary = "List linked medications",
    responses(
        (status = 200, body = [UserMedication])
    ),
    security(("bearer" = []))
)]
pub async fn list_user_medications(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<UserMedication>>, ApiError> {
    let links = state
        .service
        .list_user_medications(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(links))
}
