use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    domain::{
        common::{PantryChefConfig, services::Service},
        ingredient::catalog::seed_ingredient_catalog,
    },
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::Postgres,
        health::PostgresHealthCheckRepository,
        health_profile::PostgresHealthProfileRepository,
        image::HttpImageResolver,
        ingredient::PostgresIngredientRepository,
        jwt::JwtTokenService,
        llm::GeminiLLMClient,
        medication::{PostgresCustomMedicationRepository, PostgresUserMedicationRepository},
        pantry::PostgresPantryRepository,
        recipe::{PostgresRatingRepository, PostgresRecipeRepository},
        user::PostgresUserRepository,
    },
};

pub type PantryChefService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    JwtTokenService,
    PostgresIngredientRepository,
    PostgresPantryRepository,
    PostgresHealthProfileRepository,
    PostgresRecipeRepository,
    PostgresRatingRepository,
    PostgresCustomMedicationRepository,
    PostgresUserMedicationRepository,
    GeminiLLMClient,
    HttpImageResolver,
    PostgresHealthCheckRepository,
>;

/// Wires every adapter around an already opened database pool. No I/O happens here.
pub fn build_service(db: DatabaseConnection, config: &PantryChefConfig) -> PantryChefService {
    Service::new(
        PostgresUserRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtTokenService::new(&config.auth),
        PostgresIngredientRepository::new(db.clone()),
        PostgresPantryRepository::new(db.clone()),
        PostgresHealthProfileRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresRatingRepository::new(db.clone()),
        PostgresCustomMedicationRepository::new(db.clone()),
        PostgresUserMedicationRepository::new(db.clone()),
        GeminiLLMClient::new(&config.llm),
        HttpImageResolver::new(&config.image),
        PostgresHealthCheckRepository::new(db),
        config.llm.output_format,
    )
}

/// Applies migrations, seeds the ingredient catalog on an empty table and builds the service.
pub async fn create_service(
    postgres: &Postgres,
    config: &PantryChefConfig,
) -> Result<PantryChefService, anyhow::Error> {
    postgres.run_migrations().await?;

    let service = build_service(postgres.get_db(), config);

    seed_ingredient_catalog(&service.ingredient_repository).await?;

    if config.llm.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set, recipe generation will fail");
    }

    Ok(service)
}
