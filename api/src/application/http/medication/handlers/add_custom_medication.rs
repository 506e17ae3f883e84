use axum::extract::State;
use pantrychef_core::domain::medication::{entities::MedicationRecord, ports::MedicationService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        medication::validators::CreateCustomMedicationValidator,
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
    path = "/add-custom",
    tag = "medication",
    summary = "Add custom medication",
    responses(
        (status = 201, body = MedicationRecord),
        (status = 409, description = "A medication with that name already exists")
    ),
    request_body = CreateCustomMedicationValidator,
    security(("bearer" = []))
)]
pub async fn add_custom_medication(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCustomMedicationValidator>,
) -> Result<Response<MedicationRecord>, ApiError> {
    let medication = state
        .service
        .add_custom_medication(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(medication))
}
