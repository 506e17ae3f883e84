use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_profile::ports::HealthProfileRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenService,
    medication::{
        ports::{CustomMedicationRepository, UserMedicationRepository},
        services::linked_medications,
    },
    pantry::ports::PantryRepository,
    recipe::{
        entities::{Recipe, RecipeRating},
        helpers::generate_recipe_record,
        ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository, RecipeService},
        value_objects::{AddRatingInput, GetRecipesFilter, PromptContext, RecipeRequest},
    },
    user::ports::UserRepository,
};

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> RecipeService
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
    #[instrument(skip(self, request), fields(user_id = %identity.id(), format = %self.output_format))]
    async fn generate_recipe(
        &self,
        identity: Identity,
        request: RecipeRequest,
    ) -> Result<Recipe, CoreError> {
        request.validate()?;

        let health_profile = match request.health_profile_id {
            Some(profile_id) => Some(
                self.health_profile_repository
                    .get_by_id(profile_id, identity.id())
                    .await?
                    .ok_or_else(|| CoreError::NotFound("Health profile not found".to_string()))?,
            ),
            None => None,
        };

        let medications = linked_medications(
            &self.medication_repository,
            &self.user_medication_repository,
            identity.id(),
        )
        .await?;

        let context = PromptContext {
            health_profile,
            medications,
        };

        let recipe = generate_recipe_record(
            &self.llm_client,
            &self.image_resolver,
            identity.id(),
            &request,
            &context,
            self.output_format,
        )
        .await?;

        let recipe = self.recipe_repository.create(recipe).await?;
        info!(recipe_id = %recipe.id, fallback_used = recipe.fallback_used, "recipe generated");

        Ok(recipe)
    }

    async fn get_recipes(
        &self,
        identity: Identity,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository
            .list_by_user(identity.id(), filter)
            .await
    }

    async fn get_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id, identity.id())
            .await?
            .ok_or_else(recipe_not_found)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn set_favorite(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        is_favorite: bool,
    ) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .set_favorite(recipe_id, identity.id(), is_favorite)
            .await?
            .ok_or_else(recipe_not_found)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        if !self.recipe_repository.delete(recipe_id, identity.id()).await? {
            return Err(recipe_not_found());
        }
        Ok(())
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), rating = input.rating))]
    async fn add_rating(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        input: AddRatingInput,
    ) -> Result<RecipeRating, CoreError> {
        input.validate()?;

        let recipe = self.get_recipe(identity.clone(), recipe_id).await?;

        self.rating_repository
            .create(RecipeRating::new(
                recipe.id,
                identity.id(),
                input.rating,
                input.review,
            ))
            .await
    }

    async fn get_ratings(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeRating>, CoreError> {
        let recipe = self.get_recipe(identity, recipe_id).await?;
        self.rating_repository.list_by_recipe(recipe.id).await
    }
}

fn recipe_not_found() -> CoreError {
    CoreError::NotFound("Recipe not found".to_string())
}
