use chrono::Utc;
use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        medication::{entities::MedicationRecord, ports::CustomMedicationRepository},
    },
    entity::custom_medications::{ActiveModel, Column, Entity},
    infrastructure::db::{errors::map_insert_error, json::encode},
};

#[derive(Debug, Clone)]
pub struct PostgresCustomMedicationRepository {
    pub db: DatabaseConnection,
}

impl PostgresCustomMedicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CustomMedicationRepository for PostgresCustomMedicationRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<MedicationRecord>, CoreError> {
        let medications = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list custom medications: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(MedicationRecord::from)
            .collect();

        Ok(medications)
    }

    async fn get_by_id(
        &self,
        medication_id: String,
        user_id: Uuid,
    ) -> Result<Option<MedicationRecord>, CoreError> {
        let medication = Entity::find()
            .filter(Column::Id.eq(medication_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get custom medication: {}", e);
                CoreError::InternalServerError
            })?
            .map(MedicationRecord::from);

        Ok(medication)
    }

    async fn get_by_name(
        &self,
        name: String,
        user_id: Uuid,
    ) -> Result<Option<MedicationRecord>, CoreError> {
        let medication = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.trim().to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get custom medication by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(MedicationRecord::from);

        Ok(medication)
    }

    async fn create(
        &self,
        user_id: Uuid,
        medication: MedicationRecord,
    ) -> Result<MedicationRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(medication.id),
            user_id: Set(user_id),
            name: Set(medication.name),
            category: Set(medication.category),
            avoid_foods: Set(encode(&medication.avoid_foods, "avoid_foods")?),
            recommended_foods: Set(encode(&medication.recommended_foods, "recommended_foods")?),
            vitamin_interactions: Set(medication.vitamin_interactions.to_json()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                map_insert_error(e, "create custom medication", "Medication already exists")
            })?;

        Ok(MedicationRecord::from(created))
    }
}
