use crate::{domain::ingredient::entities::Ingredient, entity::ingredients::Model};

impl From<&Model> for Ingredient {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
        }
    }
}

impl From<Model> for Ingredient {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}
