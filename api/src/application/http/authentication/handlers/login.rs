use axum::extract::State;
use pantrychef_core::domain::authentication::{ports::AuthService, value_objects::LoginInput};

use super::AuthResponse;
use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Login",
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, description = "Invalid email or password")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<AuthResponse>, ApiError> {
    let session = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AuthResponse::from(session)))
}
