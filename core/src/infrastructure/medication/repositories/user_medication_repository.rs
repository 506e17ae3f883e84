use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        medication::{entities::UserMedication, ports::UserMedicationRepository},
    },
    entity::user_medications::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_insert_error,
};

#[derive(Debug, Clone)]
pub struct PostgresUserMedicationRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserMedicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserMedicationRepository for PostgresUserMedicationRepository {
    async fn exists(&self, user_id: Uuid, medication_id: String) -> Result<bool, CoreError> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MedicationId.eq(medication_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check medication link: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create(&self, link: UserMedication) -> Result<UserMedication, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(link.id),
            user_id: Set(link.user_id),
            medication_id: Set(link.medication_id),
            medication_name: Set(link.medication_name),
            added_at: Set(link.added_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| map_insert_error(e, "link medication", "Medication already added"))?;

        Ok(UserMedication::from(created))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<UserMedication>, CoreError> {
        let links = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::AddedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list user medications: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(UserMedication::from)
            .collect();

        Ok(links)
    }

    async fn delete(&self, user_id: Uuid, medication_id: String) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MedicationId.eq(medication_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to unlink medication: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
