use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeRating},
        value_objects::{AddRatingInput, GetRecipesFilter, RecipeRequest},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Newest first, capped at `filter.limit`.
    fn list_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn set_favorite(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        is_favorite: bool,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn delete(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RatingRepository: Send + Sync {
    fn create(
        &self,
        rating: RecipeRating,
    ) -> impl Future<Output = Result<RecipeRating, CoreError>> + Send;

    fn list_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeRating>, CoreError>> + Send;
}

/// Text generation backend.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a prompt, optionally constraining the reply to a JSON schema, and returns
    /// the raw reply text.
    fn generate(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Finds an illustrative image URL. Never fails: a placeholder URL is returned instead.
#[cfg_attr(test, mockall::automock)]
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, query: String) -> impl Future<Output = String> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        identity: Identity,
        request: RecipeRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipes(
        &self,
        identity: Identity,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn set_favorite(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        is_favorite: bool,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_rating(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        input: AddRatingInput,
    ) -> impl Future<Output = Result<RecipeRating, CoreError>> + Send;

    fn get_ratings(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeRating>, CoreError>> + Send;
}
