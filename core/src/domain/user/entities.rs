use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::value_objects::CreateUserRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email: normalize_email(&request.email),
            name: request.name.trim().to_string(),
            password_hash: request.password_hash,
            created_at: now,
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User::new(CreateUserRequest {
            email: "Cook@Example.com ".to_string(),
            name: "Cook".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        });

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "cook@example.com");
        assert!(json.get("password_hash").is_none());
    }
}
