use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{
            entities::{Ingredient, normalize_ingredient_name},
            ports::IngredientRepository,
            value_objects::GetIngredientsFilter,
        },
    },
    entity::ingredients::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_insert_error,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(ingredient: Ingredient) -> ActiveModel {
    ActiveModel {
        id: Set(ingredient.id),
        name: Set(ingredient.name),
        category: Set(ingredient.category),
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut condition = Condition::all();

        if let Some(category) = filter.category.filter(|c| !c.trim().is_empty()) {
            condition = condition.add(Column::Category.eq(category.trim().to_lowercase()));
        }

        // names are stored lowercase, so a lowercase needle makes the match case-insensitive
        if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
            condition = condition.add(Column::Name.contains(normalize_ingredient_name(&search)));
        }

        let ingredients = Entity::find()
            .filter(condition)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect();

        Ok(ingredients)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CoreError> {
        let categories = Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredient categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(categories)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(Column::Name.eq(normalize_ingredient_name(&name)))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(active_model(ingredient))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_insert_error(e, "create ingredient", "Ingredient already exists"))?;

        Ok(Ingredient::from(created))
    }

    async fn count(&self) -> Result<u64, CoreError> {
        Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count ingredients: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn create_many(&self, ingredients: Vec<Ingredient>) -> Result<(), CoreError> {
        if ingredients.is_empty() {
            return Ok(());
        }

        Entity::insert_many(ingredients.into_iter().map(active_model))
            .exec(&self.db)
            .await
            .map_err(|e| map_insert_error(e, "seed ingredients", "Ingredient already exists"))?;

        Ok(())
    }
}
