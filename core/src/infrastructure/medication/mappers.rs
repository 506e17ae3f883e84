use crate::{
    domain::medication::entities::{MedicationRecord, UserMedication},
    entity::{custom_medications, user_medications},
    infrastructure::db::json::decode_or_default,
};

impl From<&custom_medications::Model> for MedicationRecord {
    fn from(model: &custom_medications::Model) -> Self {
        Self {
            id: model.id.clone(),
            name: model.name.clone(),
            category: model.category.clone(),
            avoid_foods: decode_or_default(&model.avoid_foods, "avoid_foods"),
            recommended_foods: decode_or_default(&model.recommended_foods, "recommended_foods"),
            vitamin_interactions: decode_or_default(
                &model.vitamin_interactions,
                "vitamin_interactions",
            ),
            is_custom: true,
        }
    }
}

impl From<custom_medications::Model> for MedicationRecord {
    fn from(model: custom_medications::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&user_medications::Model> for UserMedication {
    fn from(model: &user_medications::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            medication_id: model.medication_id.clone(),
            medication_name: model.medication_name.clone(),
            added_at: model.added_at.to_utc(),
        }
    }
}

impl From<user_medications::Model> for UserMedication {
    fn from(model: user_medications::Model) -> Self {
        Self::from(&model)
    }
}
