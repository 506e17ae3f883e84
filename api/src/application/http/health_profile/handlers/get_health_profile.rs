use axum::extract::State;
use pantrychef_core::domain::health_profile::{
    entities::HealthProfile, ports::HealthProfileService,
};

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
    tag = "health-profile",
    summary = "Get health profile",
    responses(
        (status = 200, body = HealthProfile),
        (status = 404, description = "Health profile not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_health_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<HealthProfile>, ApiError> {
    let profile = state
        .service
        .get_health_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
