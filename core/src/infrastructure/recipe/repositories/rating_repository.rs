use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::RecipeRating, ports::RatingRepository},
    },
    entity::recipe_ratings::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pub db: DatabaseConnection,
}

impl PostgresRatingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RatingRepository for PostgresRatingRepository {
    async fn create(&self, rating: RecipeRating) -> Result<RecipeRating, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(rating.id),
            recipe_id: Set(rating.recipe_id),
            user_id: Set(rating.user_id),
            rating: Set(rating.rating),
            review: Set(rating.review),
            created_at: Set(rating.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create recipe rating: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(RecipeRating::from(created))
    }

    async fn list_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeRating>, CoreError> {
        let ratings = Entity::find()
            .filter(Column::RecipeId.eq(recipe_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipe ratings: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(RecipeRating::from)
            .collect();

        Ok(ratings)
    }
}
