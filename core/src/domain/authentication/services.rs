use tracing::{info, instrument};

use crate::domain::{
    authentication::{
        entities::{AuthSession, AuthorizeRequestInput, AuthorizeRequestOutput},
        ports::AuthService,
        value_objects::{Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_profile::ports::HealthProfileRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenService,
    medication::ports::{CustomMedicationRepository, UserMedicationRepository},
    pantry::ports::PantryRepository,
    recipe::ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository},
    user::{
        entities::{User, normalize_email},
        ports::UserRepository,
        value_objects::CreateUserRequest,
    },
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> AuthService
    for Service<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenService,
    I: IngredientRepository,
    P: PantryRepository,
    HP: HealthProfileRepository,
    R: RecipeRepository,
    RR: RatingRepository,
    M: CustomMedicationRepository,
    UM: UserMedicationRepository,
    LLM: LLMClient,
    IMG: ImageResolver,
    HC: HealthCheckRepository,
{
    #[instrument(skip_all, fields(email = %input.email))]
    async fn register(&self, input: RegisterInput) -> Result<AuthSession, CoreError> {
        register_user(
            &self.user_repository,
            &self.hasher_repository,
            &self.token_service,
            input,
        )
        .await
    }

    #[instrument(skip_all, fields(email = %input.email))]
    async fn login(&self, input: LoginInput) -> Result<AuthSession, CoreError> {
        login_user(
            &self.user_repository,
            &self.hasher_repository,
            &self.token_service,
            input,
        )
        .await
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_service.verify(&input.token)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::from(claims),
        })
    }

    async fn get_current_user(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or_else(|| CoreError::NotFound("User not found".to_string()))
    }
}

pub async fn register_user<U, H, T>(
    user_repository: &U,
    hasher_repository: &H,
    token_service: &T,
    input: RegisterInput,
) -> Result<AuthSession, CoreError>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenService,
{
    let email = normalize_email(&input.email);
    if email.is_empty() {
        return Err(CoreError::Invalid("Email is required".to_string()));
    }
    if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Invalid(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if user_repository.get_by_email(email.clone()).await?.is_some() {
        return Err(CoreError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hasher_repository.hash_password(input.password).await?;
    let user = user_repository
        .create_user(CreateUserRequest {
            email,
            name: input.name,
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, "user registered");
    issue_session(token_service, user)
}

pub async fn login_user<U, H, T>(
    user_repository: &U,
    hasher_repository: &H,
    token_service: &T,
    input: LoginInput,
) -> Result<AuthSession, CoreError>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenService,
{
    let user = user_repository
        .get_by_email(normalize_email(&input.email))
        .await?
        .ok_or(CoreError::InvalidCredentials)?;

    let valid = hasher_repository
        .verify_password(input.password, user.password_hash.clone())
        .await?;
    if !valid {
        return Err(CoreError::InvalidCredentials);
    }

    issue_session(token_service, user)
}

fn issue_session<T: TokenService>(token_service: &T, user: User) -> Result<AuthSession, CoreError> {
    let jwt = token_service.issue(&user)?;
    Ok(AuthSession::bearer(jwt.token, jwt.expires_at, user))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use uuid::Uuid;

    use super::*;
    use crate::domain::jwt::entities::{Jwt, JwtClaim};

    #[derive(Default)]
    struct InMemoryUsers {
        rows: Mutex<Vec<User>>,
    }

    impl UserRepository for InMemoryUsers {
        async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
            let user = User::new(request);
            self.rows.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }
    }

    struct PlainHasher;

    impl HasherRepository for PlainHasher {
        async fn hash_password(&self, password: String) -> Result<String, CoreError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(
            &self,
            password: String,
            password_hash: String,
        ) -> Result<bool, CoreError> {
            Ok(password_hash == format!("hashed:{password}"))
        }
    }

    struct StaticTokens;

    impl TokenService for StaticTokens {
        fn issue(&self, user: &User) -> Result<Jwt, CoreError> {
            Ok(Jwt {
                token: format!("token-{}", user.id),
                expires_at: 0,
            })
        }

        fn verify(&self, _token: &str) -> Result<JwtClaim, CoreError> {
            Err(CoreError::InvalidToken)
        }
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
            name: "Ada".to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login_with_any_email_casing() {
        let users = InMemoryUsers::default();

        let session = register_user(
            &users,
            &PlainHasher,
            &StaticTokens,
            register_input("Ada@Example.com", "secret1"),
        )
        .await
        .unwrap();
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.user.email, "ada@example.com");

        let login = login_user(
            &users,
            &PlainHasher,
            &StaticTokens,
            LoginInput {
                email: "ADA@example.com".to_string(),
                password: "secret1".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(login.user.id, session.user.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let users = InMemoryUsers::default();
        register_user(&users, &PlainHasher, &StaticTokens, register_input("a@b.c", "secret1"))
            .await
            .unwrap();

        let err = register_user(&users, &PlainHasher, &StaticTokens, register_input("A@B.C", "secret2"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let err = register_user(
            &InMemoryUsers::default(),
            &PlainHasher,
            &StaticTokens,
            register_input("a@b.c", "12345"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let users = InMemoryUsers::default();
        register_user(&users, &PlainHasher, &StaticTokens, register_input("a@b.c", "secret1"))
            .await
            .unwrap();

        for (email, password) in [("a@b.c", "nope-nope"), ("ghost@b.c", "secret1")] {
            let err = login_user(
                &users,
                &PlainHasher,
                &StaticTokens,
                LoginInput {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, CoreError::InvalidCredentials));
        }
    }
}
