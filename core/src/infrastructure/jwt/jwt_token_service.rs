use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    jwt::{
        entities::{Jwt, JwtClaim},
        ports::TokenService,
    },
    user::entities::User,
};

/// HS256 bearer tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl: Duration::hours(config.token_ttl_hours),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<Jwt, CoreError> {
        let claims = JwtClaim::new(user.id, user.email.clone(), Utc::now(), self.ttl);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Jwt {
            token,
            expires_at: claims.exp,
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let data = decode::<JwtClaim>(token, &self.decoding_key, &Self::validation()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected bearer token: {}", e);
                    CoreError::InvalidToken
                }
            },
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::value_objects::CreateUserRequest;

    fn service(secret: &str, ttl_hours: i64) -> JwtTokenService {
        JwtTokenService::new(&AuthConfig {
            token_secret: secret.to_string(),
            token_ttl_hours: ttl_hours,
        })
    }

    fn user() -> User {
        User::new(CreateUserRequest {
            email: "cook@example.com".to_string(),
            name: "Cook".to_string(),
            password_hash: String::new(),
        })
    }

    #[test]
    fn issued_tokens_verify_back_to_the_user() {
        let service = service("pantry-secret", 24);
        let user = user();

        let jwt = service.issue(&user).unwrap();
        let claims = service.verify(&jwt.token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "cook@example.com");
        assert_eq!(claims.exp, jwt.expires_at);
    }

    #[test]
    fn expired_tokens_are_reported_as_expired() {
        let service = service("pantry-secret", 24);
        let issued_at = Utc::now() - Duration::hours(2);
        let claims = JwtClaim::new(
            Uuid::new_v4(),
            "cook@example.com".to_string(),
            issued_at,
            Duration::hours(1),
        );
        let token = encode(&Header::new(Algorithm::HS256), &claims, &service.encoding_key).unwrap();

        assert!(matches!(service.verify(&token), Err(CoreError::TokenExpired)));
    }

    #[test]
    fn foreign_or_garbage_tokens_are_invalid() {
        let ours = service("pantry-secret", 24);
        let theirs = service("other-secret", 24);
        let token = theirs.issue(&user()).unwrap().token;

        assert!(matches!(ours.verify(&token), Err(CoreError::InvalidToken)));
        assert!(matches!(ours.verify("not.a.token"), Err(CoreError::InvalidToken)));
    }
}
