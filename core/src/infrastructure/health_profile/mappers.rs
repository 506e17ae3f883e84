use crate::{
    domain::health_profile::entities::HealthProfile, entity::health_profiles::Model,
    infrastructure::db::json::decode_or_default,
};

impl From<&Model> for HealthProfile {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            conditions: decode_or_default(&model.conditions, "conditions"),
            allergies: decode_or_default(&model.allergies, "allergies"),
            dietary_restrictions: decode_or_default(
                &model.dietary_restrictions,
                "dietary_restrictions",
            ),
            age_range: model.age_range.clone(),
            activity_level: model.activity_level.clone(),
            health_goals: decode_or_default(&model.health_goals, "health_goals"),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<Model> for HealthProfile {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}
