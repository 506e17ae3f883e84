use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_profile::{
        entities::HealthProfile,
        ports::{HealthProfileRepository, HealthProfileService},
        value_objects::HealthProfileInput,
    },
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenService,
    medication::ports::{CustomMedicationRepository, UserMedicationRepository},
    pantry::ports::PantryRepository,
    recipe::ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository},
    user::ports::UserRepository,
};

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> HealthProfileService
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
    async fn get_health_profile(&self, identity: Identity) -> Result<HealthProfile, CoreError> {
        self.health_profile_repository
            .get_by_user(identity.id())
            .await?
            .ok_or_else(|| CoreError::NotFound("Health profile not found".to_string()))
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn save_health_profile(
        &self,
        identity: Identity,
        input: HealthProfileInput,
    ) -> Result<HealthProfile, CoreError> {
        replace_health_profile(&self.health_profile_repository, &identity, input).await
    }
}

pub async fn replace_health_profile<HP>(
    health_profile_repository: &HP,
    identity: &Identity,
    input: HealthProfileInput,
) -> Result<HealthProfile, CoreError>
where
    HP: HealthProfileRepository,
{
    let previous = health_profile_repository.get_by_user(identity.id()).await?;

    health_profile_repository.delete_by_user(identity.id()).await?;

    let profile = HealthProfile::new(
        identity.id(),
        input,
        previous.map(|profile| profile.created_at),
    );
    health_profile_repository.create(profile).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use uuid::Uuid;

    use super::*;

    #[derive(Default)]
    struct InMemoryProfiles {
        rows: Mutex<Vec<HealthProfile>>,
    }

    impl HealthProfileRepository for InMemoryProfiles {
        async fn get_by_user(&self, user_id: Uuid) -> Result<Option<HealthProfile>, CoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id == user_id)
                .cloned())
        }

        async fn get_by_id(
            &self,
            profile_id: Uuid,
            user_id: Uuid,
        ) -> Result<Option<HealthProfile>, CoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == profile_id && p.user_id == user_id)
                .cloned())
        }

        async fn delete_by_user(&self, user_id: Uuid) -> Result<(), CoreError> {
            self.rows.lock().unwrap().retain(|p| p.user_id != user_id);
            Ok(())
        }

        async fn create(&self, profile: HealthProfile) -> Result<HealthProfile, CoreError> {
            self.rows.lock().unwrap().push(profile.clone());
            Ok(profile)
        }
    }

    #[tokio::test]
    async fn saving_twice_keeps_a_single_profile() {
        let repository = InMemoryProfiles::default();
        let identity = Identity::new(Uuid::new_v4(), "cook@example.com".to_string());

        let first = replace_health_profile(
            &repository,
            &identity,
            HealthProfileInput {
                conditions: vec!["hypertension".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let second = replace_health_profile(
            &repository,
            &identity,
            HealthProfileInput {
                allergies: vec!["shellfish".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let rows = repository.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, second.id);
        assert!(rows[0].conditions.is_empty());
        assert_eq!(second.created_at, first.created_at);
    }
}
