use crate::domain::{authentication::value_objects::Identity, user::entities::User};

pub struct AuthorizeRequestInput {
    pub token: String,
}

pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: i64,
    pub user: User,
}

impl AuthSession {
    pub fn bearer(access_token: String, expires_at: i64, user: User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_at,
            user,
        }
    }
}
