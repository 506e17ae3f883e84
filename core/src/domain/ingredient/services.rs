use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_profile::ports::HealthProfileRepository,
    ingredient::{
        entities::{Ingredient, normalize_ingredient_name},
        ports::{IngredientRepository, IngredientService},
        value_objects::{CreateIngredientInput, GetIngredientsFilter},
    },
    jwt::ports::TokenService,
    medication::ports::{CustomMedicationRepository, UserMedicationRepository},
    pantry::ports::PantryRepository,
    recipe::ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository},
    user::ports::UserRepository,
};

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> IngredientService
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
    async fn get_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.fetch_ingredients(filter).await
    }

    async fn get_categories(&self) -> Result<Vec<String>, CoreError> {
        self.ingredient_repository.fetch_categories().await
    }

    #[instrument(skip(self), fields(name = %input.name))]
    async fn create_ingredient(&self, input: CreateIngredientInput) -> Result<Ingredient, CoreError> {
        create_catalog_ingredient(&self.ingredient_repository, input).await
    }
}

pub async fn create_catalog_ingredient<I>(
    ingredient_repository: &I,
    input: CreateIngredientInput,
) -> Result<Ingredient, CoreError>
where
    I: IngredientRepository,
{
    let name = normalize_ingredient_name(&input.name);
    if name.is_empty() {
        return Err(CoreError::Invalid("Ingredient name cannot be empty".to_string()));
    }

    if ingredient_repository.get_by_name(name.clone()).await?.is_some() {
        return Err(CoreError::Conflict("Ingredient already exists".to_string()));
    }

    ingredient_repository
        .create_ingredient(Ingredient::new(&name, &input.category))
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct InMemoryIngredients {
        rows: Mutex<Vec<Ingredient>>,
    }

    impl IngredientRepository for InMemoryIngredients {
        async fn fetch_ingredients(
            &self,
            _filter: GetIngredientsFilter,
        ) -> Result<Vec<Ingredient>, CoreError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn fetch_categories(&self) -> Result<Vec<String>, CoreError> {
            Ok(vec![])
        }

        async fn get_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.name == name)
                .cloned())
        }

        async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
            self.rows.lock().unwrap().push(ingredient.clone());
            Ok(ingredient)
        }

        async fn count(&self) -> Result<u64, CoreError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }

        async fn create_many(&self, ingredients: Vec<Ingredient>) -> Result<(), CoreError> {
            self.rows.lock().unwrap().extend(ingredients);
            Ok(())
        }
    }

    #[tokio::test]
    async fn creating_an_ingredient_lowercases_the_name() {
        let repository = InMemoryIngredients::default();

        let created = create_catalog_ingredient(
            &repository,
            CreateIngredientInput {
                name: "  Dragon Fruit ".to_string(),
                category: "Fruits".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(created.name, "dragon fruit");
        assert_eq!(created.category, "fruits");
    }

    #[tokio::test]
    async fn duplicate_names_conflict_regardless_of_case() {
        let repository = InMemoryIngredients::default();
        let input = |name: &str| CreateIngredientInput {
            name: name.to_string(),
            category: "vegetables".to_string(),
        };

        create_catalog_ingredient(&repository, input("kale")).await.unwrap();
        let err = create_catalog_ingredient(&repository, input("KALE"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn seeding_only_runs_on_an_empty_table() {
        use crate::domain::ingredient::catalog::{catalog_ingredients, seed_ingredient_catalog};

        let repository = InMemoryIngredients::default();

        let inserted = seed_ingredient_catalog(&repository).await.unwrap();
        assert_eq!(inserted, catalog_ingredients().len());

        let again = seed_ingredient_catalog(&repository).await.unwrap();
        assert_eq!(again, 0);
        assert_eq!(repository.count().await.unwrap() as usize, inserted);
    }
}
