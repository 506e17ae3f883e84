use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::text_map::TextMap, generate_timestamp};

pub const PLACEHOLDER_TITLE: &str = "Generated Recipe";

/// Output contract requested from the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Labeled,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Labeled => write!(f, "labeled"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "labeled" | "text" => Ok(OutputFormat::Labeled),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Anything that is not clearly easy or hard counts as medium.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim().to_lowercase();
        if text.starts_with("easy") {
            Difficulty::Easy
        } else if text.starts_with("hard") {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub item: String,
    #[serde(default)]
    pub amount: String,
}

impl RecipeIngredient {
    pub fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalBenefit {
    pub ingredient: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthWarning {
    pub ingredient: String,
    pub warning: String,
}

/// A recipe as recovered from generator output, before it is owned by anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub dietary_tags: Vec<String>,
    #[schema(value_type = Object)]
    pub nutritional_info: TextMap,
    pub nutritional_benefits: Vec<NutritionalBenefit>,
    pub health_warnings: Vec<HealthWarning>,
    #[schema(value_type = Object)]
    pub condition_suitability: TextMap,
    pub health_notes: Option<String>,
    pub additional_items_needed: Vec<String>,
    pub output_format: OutputFormat,
    pub fallback_used: bool,
}

impl GeneratedRecipe {
    pub fn empty(output_format: OutputFormat, servings: u32) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            title: PLACEHOLDER_TITLE.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            total_time: String::new(),
            servings,
            difficulty: Difficulty::default(),
            dietary_tags: Vec::new(),
            nutritional_info: TextMap::new(),
            nutritional_benefits: Vec::new(),
            health_warnings: Vec::new(),
            condition_suitability: TextMap::new(),
            health_notes: None,
            additional_items_needed: Vec::new(),
            output_format,
            fallback_used: false,
        }
    }

    pub fn has_placeholder_title(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }
}

/// Request tags copied onto the stored recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeTags {
    pub meal_type: String,
    pub dish_type: Option<String>,
    pub diet_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub dietary_tags: Vec<String>,
    pub meal_type: String,
    pub dish_type: Option<String>,
    pub diet_type: Option<String>,
    #[schema(value_type = Object)]
    pub nutritional_info: TextMap,
    pub nutritional_benefits: Vec<NutritionalBenefit>,
    pub health_warnings: Vec<HealthWarning>,
    #[schema(value_type = Object)]
    pub condition_suitability: TextMap,
    pub health_notes: Option<String>,
    pub additional_items_needed: Vec<String>,
    pub image_url: String,
    pub is_favorite: bool,
    pub output_format: OutputFormat,
    pub fallback_used: bool,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn from_generated(
        generated: GeneratedRecipe,
        user_id: Uuid,
        tags: RecipeTags,
        image_url: String,
    ) -> Self {
        Self {
            id: generated.id,
            user_id,
            title: generated.title,
            description: generated.description,
            ingredients: generated.ingredients,
            instructions: generated.instructions,
            prep_time: generated.prep_time,
            cook_time: generated.cook_time,
            total_time: generated.total_time,
            servings: generated.servings,
            difficulty: generated.difficulty,
            dietary_tags: generated.dietary_tags,
            meal_type: tags.meal_type,
            dish_type: tags.dish_type,
            diet_type: tags.diet_type,
            nutritional_info: generated.nutritional_info,
            nutritional_benefits: generated.nutritional_benefits,
            health_warnings: generated.health_warnings,
            condition_suitability: generated.condition_suitability,
            health_notes: generated.health_notes,
            additional_items_needed: generated.additional_items_needed,
            image_url,
            is_favorite: false,
            output_format: generated.output_format,
            fallback_used: generated.fallback_used,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRating {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RecipeRating {
    pub fn new(recipe_id: Uuid, user_id: Uuid, rating: i32, review: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            user_id,
            rating,
            review: review
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults_to_medium() {
        assert_eq!(Difficulty::from_text("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_text(" hard (requires a mandoline)"), Difficulty::Hard);
        assert_eq!(Difficulty::from_text("easy/medium/hard"), Difficulty::Easy);
        assert_eq!(Difficulty::from_text("moderate"), Difficulty::Medium);
        assert_eq!(Difficulty::from_text(""), Difficulty::Medium);
    }

    #[test]
    fn output_format_parses_config_values() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("labeled".parse::<OutputFormat>(), Ok(OutputFormat::Labeled));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
