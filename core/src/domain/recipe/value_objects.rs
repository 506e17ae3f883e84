use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, health_profile::entities::HealthProfile,
    medication::entities::MedicationRecord,
};

pub const DEFAULT_SERVINGS: u32 = 2;
pub const MAX_SERVINGS: u32 = 50;
pub const DEFAULT_MEAL_TYPE: &str = "any meal";
pub const RECIPE_LIST_LIMIT: u64 = 100;

#[derive(Debug, Clone, Default)]
pub struct RecipeRequest {
    pub pantry_items: Vec<String>,
    pub dietary_preference: String,
    pub meal_type: Option<String>,
    pub dish_type: Option<String>,
    pub diet_type: Option<String>,
    pub servings: Option<u32>,
    pub health_profile_id: Option<Uuid>,
}

impl RecipeRequest {
    /// Rejects requests that must never reach the generator.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.pantry_items().is_empty() {
            return Err(CoreError::Invalid("No pantry items provided".to_string()));
        }

        if let Some(servings) = self.servings
            && !(1..=MAX_SERVINGS).contains(&servings)
        {
            return Err(CoreError::Invalid(format!(
                "Servings must be between 1 and {MAX_SERVINGS}"
            )));
        }

        Ok(())
    }

    /// Trimmed, non-empty pantry items in request order.
    pub fn pantry_items(&self) -> Vec<&str> {
        self.pantry_items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect()
    }

    pub fn servings(&self) -> u32 {
        self.servings.unwrap_or(DEFAULT_SERVINGS)
    }

    pub fn meal_type(&self) -> &str {
        non_blank(self.meal_type.as_deref()).unwrap_or(DEFAULT_MEAL_TYPE)
    }

    pub fn dish_type(&self) -> Option<&str> {
        non_blank(self.dish_type.as_deref())
    }

    pub fn diet_type(&self) -> Option<&str> {
        non_blank(self.diet_type.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Health data folded into the prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    pub health_profile: Option<HealthProfile>,
    pub medications: Vec<MedicationRecord>,
}

#[derive(Debug, Clone)]
pub struct GetRecipesFilter {
    pub favorites_only: bool,
    pub limit: u64,
}

impl Default for GetRecipesFilter {
    fn default() -> Self {
        Self {
            favorites_only: false,
            limit: RECIPE_LIST_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddRatingInput {
    pub rating: i32,
    pub review: Option<String>,
}

impl AddRatingInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::Invalid(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: &[&str], servings: Option<u32>) -> RecipeRequest {
        RecipeRequest {
            pantry_items: items.iter().map(|i| i.to_string()).collect(),
            dietary_preference: "vegan".to_string(),
            servings,
            ..Default::default()
        }
    }

    #[test]
    fn blank_pantry_items_do_not_count() {
        assert!(matches!(
            request(&[" ", ""], None).validate(),
            Err(CoreError::Invalid(_))
        ));
        assert!(request(&["rice"], None).validate().is_ok());
    }

    #[test]
    fn servings_must_be_in_range() {
        assert!(request(&["rice"], Some(0)).validate().is_err());
        assert!(request(&["rice"], Some(51)).validate().is_err());
        assert!(request(&["rice"], Some(50)).validate().is_ok());
        assert_eq!(request(&["rice"], None).servings(), 2);
    }

    #[test]
    fn meal_type_falls_back_to_any_meal() {
        let mut req = request(&["rice"], None);
        assert_eq!(req.meal_type(), "any meal");

        req.meal_type = Some("  ".to_string());
        assert_eq!(req.meal_type(), "any meal");

        req.meal_type = Some("dinner".to_string());
        assert_eq!(req.meal_type(), "dinner");
    }
}
