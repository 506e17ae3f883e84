use axum::extract::State;
use pantrychef_core::domain::authentication::{ports::AuthService, value_objects::RegisterInput};

use super::AuthResponse;
use crate::application::http::{
    authentication::validators::RegisterValidator,
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
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account and returns a bearer token for it.",
    responses(
        (status = 200, body = AuthResponse),
        (status = 400, description = "Invalid email, password or name"),
        (status = 409, description = "Email already registered")
    ),
    request_body = RegisterValidator
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<AuthResponse>, ApiError> {
    let session = state
        .service
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AuthResponse::from(session)))
}
