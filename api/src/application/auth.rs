use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use pantrychef_core::domain::{
    authentication::{
        entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
    },
    common::entities::app_errors::CoreError,
};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Unauthorized(error.to_string())
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Verifies the bearer token, if any, and stores the resulting `Identity` or the
/// reason it was rejected in the request extensions. `RequiredIdentity` turns a
/// missing identity into a 401.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    match extract_token_from_bearer(&mut parts).await {
        Ok(token) => match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(output) => {
                parts.extensions.insert(output.identity);
            }
            Err(e) => {
                debug!("Bearer token rejected: {}", e);
                let reason = match e {
                    CoreError::TokenExpired => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                };
                parts.extensions.insert(reason);
            }
        },
        Err(reason) => {
            parts.extensions.insert(reason);
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Extractor for routes that need an authenticated caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let reason = parts
            .extensions
            .get::<AuthError>()
            .copied()
            .unwrap_or(AuthError::TokenNotFound);

        Err(ApiError::from(reason))
    }
}
