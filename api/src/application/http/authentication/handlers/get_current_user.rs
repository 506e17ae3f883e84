use axum::extract::State;
use pantrychef_core::domain::authentication::ports::AuthService;

use super::UserResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token")
    ),
    security(("bearer" = []))
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .get_current_user(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse::from(user)))
}
