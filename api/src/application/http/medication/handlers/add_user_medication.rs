use axum::extract::{Query, State};
use pantrychef_core::domain::medication::{entities::UserMedication, ports::MedicationService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        medication::validators::AddUserMedicationQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/add",
    tag = "user-medication",
    summary = "Link medication",
    params(AddUserMedicationQuery),
    responses(
        (status = 201, body = UserMedication),
        (status = 404, description = "Medication not found"),
        (status = 409, description = "Medication already added")
    ),
    security(("bearer" = []))
)]
pub async fn add_user_medication(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<AddUserMedicationQuery>,
) -> Result<Response<UserMedication>, ApiError> {
    let link = state
        .service
        .add_user_medication(identity, query.medication_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(link))
}
