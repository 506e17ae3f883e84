use crate::{domain::pantry::entities::PantryItem, entity::pantry_items::Model};

impl From<&Model> for PantryItem {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            ingredient_name: model.ingredient_name.clone(),
            quantity: model.quantity.clone(),
            notes: model.notes.clone(),
            added_date: model.added_date.to_utc(),
        }
    }
}

impl From<Model> for PantryItem {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}
