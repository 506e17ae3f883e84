use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    prelude::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository, value_objects::GetRecipesFilter},
    },
    entity::recipes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let active_model = ActiveModel::try_from(recipe)?;

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(created))
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        if filter.favorites_only {
            query = query.filter(Column::IsFavorite.eq(true));
        }

        let recipes = query
            .order_by_desc(Column::CreatedAt)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Recipe::from)
            .collect();

        Ok(recipes)
    }

    async fn get_by_id(&self, recipe_id: Uuid, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = Entity::find()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn set_favorite(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        is_favorite: bool,
    ) -> Result<Option<Recipe>, CoreError> {
        let updated = Entity::update_many()
            .col_expr(Column::IsFavorite, Expr::value(is_favorite))
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe favorite flag: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.first().map(Recipe::from))
    }

    async fn delete(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
