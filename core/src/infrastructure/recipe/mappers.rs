use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::entities::{Difficulty, Recipe, RecipeRating},
    },
    entity::{recipe_ratings, recipes},
    infrastructure::db::json::{decode_or_default, encode},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title.clone(),
            description: model.description.clone(),
            ingredients: decode_or_default(&model.ingredients, "ingredients"),
            instructions: decode_or_default(&model.instructions, "instructions"),
            prep_time: model.prep_time.clone(),
            cook_time: model.cook_time.clone(),
            total_time: model.total_time.clone(),
            servings: u32::try_from(model.servings).unwrap_or_default(),
            difficulty: Difficulty::from_text(&model.difficulty),
            dietary_tags: decode_or_default(&model.dietary_tags, "dietary_tags"),
            meal_type: model.meal_type.clone(),
            dish_type: model.dish_type.clone(),
            diet_type: model.diet_type.clone(),
            nutritional_info: decode_or_default(&model.nutritional_info, "nutritional_info"),
            nutritional_benefits: decode_or_default(
                &model.nutritional_benefits,
                "nutritional_benefits",
            ),
            health_warnings: decode_or_default(&model.health_warnings, "health_warnings"),
            condition_suitability: decode_or_default(
                &model.condition_suitability,
                "condition_suitability",
            ),
            health_notes: model.health_notes.clone(),
            additional_items_needed: decode_or_default(
                &model.additional_items_needed,
                "additional_items_needed",
            ),
            image_url: model.image_url.clone(),
            is_favorite: model.is_favorite,
            output_format: model.output_format.parse().unwrap_or_else(|e| {
                warn!("Unreadable output format on recipe {}: {}", model.id, e);
                Default::default()
            }),
            fallback_used: model.fallback_used,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl TryFrom<Recipe> for recipes::ActiveModel {
    type Error = CoreError;

    fn try_from(recipe: Recipe) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            title: Set(recipe.title),
            description: Set(recipe.description),
            ingredients: Set(encode(&recipe.ingredients, "ingredients")?),
            instructions: Set(encode(&recipe.instructions, "instructions")?),
            prep_time: Set(recipe.prep_time),
            cook_time: Set(recipe.cook_time),
            total_time: Set(recipe.total_time),
            servings: Set(i32::try_from(recipe.servings)
                .map_err(|_| CoreError::Invalid("Servings out of range".to_string()))?),
            difficulty: Set(recipe.difficulty.as_str().to_string()),
            dietary_tags: Set(encode(&recipe.dietary_tags, "dietary_tags")?),
            meal_type: Set(recipe.meal_type),
            dish_type: Set(recipe.dish_type),
            diet_type: Set(recipe.diet_type),
            nutritional_info: Set(recipe.nutritional_info.to_json()),
            nutritional_benefits: Set(encode(
                &recipe.nutritional_benefits,
                "nutritional_benefits",
            )?),
            health_warnings: Set(encode(&recipe.health_warnings, "health_warnings")?),
            condition_suitability: Set(recipe.condition_suitability.to_json()),
            health_notes: Set(recipe.health_notes),
            additional_items_needed: Set(encode(
                &recipe.additional_items_needed,
                "additional_items_needed",
            )?),
            image_url: Set(recipe.image_url),
            is_favorite: Set(recipe.is_favorite),
            output_format: Set(recipe.output_format.to_string()),
            fallback_used: Set(recipe.fallback_used),
            created_at: Set(recipe.created_at.fixed_offset()),
        })
    }
}

impl From<&recipe_ratings::Model> for RecipeRating {
    fn from(model: &recipe_ratings::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            user_id: model.user_id,
            rating: model.rating,
            review: model.review.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipe_ratings::Model> for RecipeRating {
    fn from(model: recipe_ratings::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn legacy_row() -> recipes::Model {
        recipes::Model {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            title: "Veggie Rice Bowl".to_string(),
            description: String::new(),
            ingredients: json!([{"item": "rice", "amount": "1 cup"}]),
            instructions: json!(["Cook rice"]),
            prep_time: "10 minutes".to_string(),
            cook_time: "20 minutes".to_string(),
            total_time: "30 minutes".to_string(),
            servings: 2,
            difficulty: "Easy".to_string(),
            dietary_tags: json!("vegan"),
            meal_type: "dinner".to_string(),
            dish_type: None,
            diet_type: Some("vegan".to_string()),
            nutritional_info: json!({"calories": 420, "protein": "12g"}),
            nutritional_benefits: serde_json::Value::Null,
            health_warnings: json!([]),
            condition_suitability: json!({}),
            health_notes: None,
            additional_items_needed: json!(["salt"]),
            image_url: "https://example.com/bowl.jpg".to_string(),
            is_favorite: true,
            output_format: "json".to_string(),
            fallback_used: false,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn legacy_rows_read_with_defaults() {
        let recipe = Recipe::from(legacy_row());

        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.instructions, vec!["Cook rice"]);
        assert!(recipe.dietary_tags.is_empty());
        assert!(recipe.nutritional_benefits.is_empty());
        assert_eq!(recipe.nutritional_info.get("calories"), Some("420"));
        assert_eq!(recipe.nutritional_info.get("protein"), Some("12g"));
    }

    #[test]
    fn unknown_output_format_reads_as_json() {
        let mut row = legacy_row();
        row.output_format = "yaml".to_string();

        let recipe = Recipe::from(row);
        assert_eq!(recipe.output_format, crate::domain::recipe::entities::OutputFormat::Json);
    }
}
