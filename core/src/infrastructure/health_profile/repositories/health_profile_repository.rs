use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health_profile::{entities::HealthProfile, ports::HealthProfileRepository},
    },
    entity::health_profiles::{ActiveModel, Column, Entity},
    infrastructure::db::{errors::map_insert_error, json::encode},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthProfileRepository for PostgresHealthProfileRepository {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<HealthProfile>, CoreError> {
        let profile = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get health profile: {}", e);
                CoreError::InternalServerError
            })?
            .map(HealthProfile::from);

        Ok(profile)
    }

    async fn get_by_id(
        &self,
        profile_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<HealthProfile>, CoreError> {
        let profile = Entity::find()
            .filter(Column::Id.eq(profile_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get health profile by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(HealthProfile::from);

        Ok(profile)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete health profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn create(&self, profile: HealthProfile) -> Result<HealthProfile, CoreError> {
        let active_model = ActiveModel {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            conditions: Set(encode(&profile.conditions, "conditions")?),
            allergies: Set(encode(&profile.allergies, "allergies")?),
            dietary_restrictions: Set(encode(
                &profile.dietary_restrictions,
                "dietary_restrictions",
            )?),
            age_range: Set(profile.age_range),
            activity_level: Set(profile.activity_level),
            health_goals: Set(encode(&profile.health_goals, "health_goals")?),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                map_insert_error(e, "create health profile", "Health profile already exists")
            })?;

        Ok(HealthProfile::from(created))
    }
}
