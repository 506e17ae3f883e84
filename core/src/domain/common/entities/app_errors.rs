use thiserror::Error;

use crate::domain::recipe::normalizer::GenerationParseError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error(transparent)]
    GenerationParse(#[from] GenerationParseError),

    #[error("Internal server error")]
    InternalServerError,
}
