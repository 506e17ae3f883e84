use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::PantryItem, ports::PantryRepository},
    },
    entity::pantry_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresPantryRepository {
    pub db: DatabaseConnection,
}

impl PostgresPantryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PantryRepository for PostgresPantryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PantryItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::AddedDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list pantry items: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(PantryItem::from)
            .collect();

        Ok(items)
    }

    async fn create(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(item.id),
            user_id: Set(item.user_id),
            ingredient_name: Set(item.ingredient_name),
            quantity: Set(item.quantity),
            notes: Set(item.notes),
            added_date: Set(item.added_date.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create pantry item: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(PantryItem::from(created))
    }

    async fn delete(&self, item_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete pantry item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear pantry: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
