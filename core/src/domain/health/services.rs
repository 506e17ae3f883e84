use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    health_profile::ports::HealthProfileRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenService,
    medication::ports::{CustomMedicationRepository, UserMedicationRepository},
    pantry::ports::PantryRepository,
    recipe::ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository},
    user::ports::UserRepository,
};

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> HealthCheckService
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
