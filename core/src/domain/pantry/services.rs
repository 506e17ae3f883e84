use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_profile::ports::HealthProfileRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenService,
    medication::ports::{CustomMedicationRepository, UserMedicationRepository},
    pantry::{
        entities::PantryItem,
        ports::{PantryRepository, PantryService},
        value_objects::AddPantryItemInput,
    },
    recipe::ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository},
    user::ports::UserRepository,
};

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> PantryService
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
    async fn get_pantry(&self, identity: Identity) -> Result<Vec<PantryItem>, CoreError> {
        self.pantry_repository.list_by_user(identity.id()).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn add_pantry_item(
        &self,
        identity: Identity,
        input: AddPantryItemInput,
    ) -> Result<PantryItem, CoreError> {
        if input.ingredient_name.trim().is_empty() {
            return Err(CoreError::Invalid(
                "Ingredient name cannot be empty".to_string(),
            ));
        }

        self.pantry_repository
            .create(PantryItem::new(identity.id(), input))
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn remove_pantry_item(&self, identity: Identity, item_id: Uuid) -> Result<(), CoreError> {
        let deleted = self.pantry_repository.delete(item_id, identity.id()).await?;
        if !deleted {
            return Err(CoreError::NotFound("Item not found".to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn clear_pantry(&self, identity: Identity) -> Result<u64, CoreError> {
        self.pantry_repository.clear(identity.id()).await
    }
}
