use axum::extract::State;
use pantrychef_core::domain::health_profile::{
    entities::HealthProfile, ports::HealthProfileService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        health_profile::validators::HealthProfileValidator,
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
    path = "",
    tag = "health-profile",
    summary = "Save health profile",
    description = "Replaces the caller's health profile with the submitted one.",
    responses(
        (status = 200, body = HealthProfile)
    ),
    request_body = HealthProfileValidator,
    security(("bearer" = []))
)]
pub async fn save_health_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<HealthProfileValidator>,
) -> Result<Response<HealthProfile>, ApiError> {
    let profile = state
        .service
        .save_health_profile(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
