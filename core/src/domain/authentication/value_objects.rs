use uuid::Uuid;

use crate::domain::jwt::entities::JwtClaim;

/// The authenticated caller, reconstructed from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: Uuid,
    email: String,
}

impl Identity {
    pub fn new(user_id: Uuid, email: String) -> Self {
        Self { user_id, email }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        Self::new(claims.sub, claims.email)
    }
}

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}
