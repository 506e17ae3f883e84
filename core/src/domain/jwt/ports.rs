use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::entities::{Jwt, JwtClaim},
    user::entities::User,
};

/// Signs and verifies bearer tokens. Pure CPU work, so no futures here.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    fn issue(&self, user: &User) -> Result<Jwt, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
