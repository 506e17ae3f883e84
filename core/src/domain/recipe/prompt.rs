use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::OutputFormat,
        value_objects::{PromptContext, RecipeRequest},
    },
};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert chef and nutritionist specializing in creating delicious, healthy recipes.";

/// Builds the generator prompt. Same inputs always give the same text.
pub fn build_recipe_prompt(
    request: &RecipeRequest,
    context: &PromptContext,
    format: OutputFormat,
) -> Result<String, CoreError> {
    let pantry_items = request.pantry_items();
    if pantry_items.is_empty() {
        return Err(CoreError::Invalid("No pantry items provided".to_string()));
    }

    let dietary_preference = request.dietary_preference.trim();
    let meal_type = request.meal_type();
    let servings = request.servings();

    let mut prompt = format!(
        "{SYSTEM_INSTRUCTION}\n\nCreate a detailed, delicious {dietary_preference} recipe for {meal_type}.\n\nAvailable ingredients: {}\n",
        pantry_items.join(", ")
    );

    prompt.push_str("\nRequirements:\n");
    prompt.push_str(&format!("- Recipe must be {dietary_preference}\n"));
    prompt.push_str(&format!("- Suitable for {meal_type}\n"));
    if let Some(dish_type) = request.dish_type() {
        prompt.push_str(&format!("- Dish type: {dish_type}\n"));
    }
    if let Some(diet_type) = request.diet_type() {
        prompt.push_str(&format!("- Follow a {diet_type} diet\n"));
    }
    prompt.push_str(&format!("- Serves {servings} people\n"));
    prompt.push_str("- Use as many of the available ingredients as possible\n");
    prompt.push_str("- List any additional common ingredients needed\n");
    prompt.push_str(
        "- Include nutritional information per serving (calories, protein, carbs, fat, fiber)\n",
    );
    prompt.push_str("- Rate the difficulty level (easy/medium/hard)\n");
    prompt.push_str("- Provide prep time, cook time, and total time\n");

    push_health_section(&mut prompt, context);

    match format {
        OutputFormat::Json => push_json_contract(&mut prompt, dietary_preference, meal_type, servings),
        OutputFormat::Labeled => push_labeled_contract(&mut prompt),
    }

    Ok(prompt)
}

fn push_health_section(prompt: &mut String, context: &PromptContext) {
    let mut lines = Vec::new();

    if let Some(profile) = &context.health_profile {
        push_list(&mut lines, "Health conditions", &profile.conditions);
        push_list(&mut lines, "Allergies (never use these)", &profile.allergies);
        push_list(&mut lines, "Dietary restrictions", &profile.dietary_restrictions);
        push_list(&mut lines, "Health goals", &profile.health_goals);
        if let Some(age_range) = &profile.age_range {
            lines.push(format!("- Age range: {age_range}"));
        }
        if let Some(activity_level) = &profile.activity_level {
            lines.push(format!("- Activity level: {activity_level}"));
        }
    }

    for medication in &context.medications {
        if medication.avoid_foods.is_empty() {
            lines.push(format!("- Takes {}", medication.name));
        } else {
            lines.push(format!(
                "- Takes {} (avoid: {})",
                medication.name,
                medication.avoid_foods.join(", ")
            ));
        }
    }

    if lines.is_empty() {
        return;
    }

    prompt.push_str("\nHealth considerations:\n");
    for line in lines {
        prompt.push_str(&line);
        prompt.push('\n');
    }
    prompt.push_str(
        "Explain the nutritional benefits of key ingredients, warn about any ingredient that conflicts with the conditions or medications above, and describe how suitable the recipe is for each condition.\n",
    );
}

fn push_list(lines: &mut Vec<String>, label: &str, values: &[String]) {
    if !values.is_empty() {
        lines.push(format!("- {label}: {}", values.join(", ")));
    }
}

fn push_json_contract(prompt: &mut String, dietary_preference: &str, meal_type: &str, servings: u32) {
    prompt.push_str(&format!(
        r#"
Return the recipe as a single JSON object in exactly this format, with no prose and no markdown:
{{
    "title": "Recipe Name",
    "description": "Brief appetizing description",
    "ingredients": [{{"item": "ingredient name", "amount": "quantity"}}],
    "instructions": ["Step 1", "Step 2", "Step 3"],
    "prep_time": "X minutes",
    "cook_time": "X minutes",
    "total_time": "X minutes",
    "servings": {servings},
    "difficulty": "easy/medium/hard",
    "dietary_tags": ["{dietary_preference}"],
    "meal_type": "{meal_type}",
    "nutritional_info": {{"calories": "0", "protein": "0g", "carbs": "0g", "fat": "0g", "fiber": "0g"}},
    "nutritional_benefits": [{{"ingredient": "name", "benefit": "why it helps"}}],
    "health_warnings": [{{"ingredient": "name", "warning": "what to watch for"}}],
    "condition_suitability": {{"condition": "advice"}},
    "additional_items_needed": ["item1", "item2"]
}}
"#
    ));
}

fn push_labeled_contract(prompt: &mut String) {
    prompt.push_str(
        r#"
Format the recipe as plain text using exactly these section labels:
Recipe Name: <name>
Description: <one or two sentences>
Prep Time: <duration>
Cook Time: <duration>
Servings: <number>
Ingredients:
- <amount> <ingredient>
Instructions:
1. <step>
Nutritional Info (per serving):
- Calories: <value>
- Protein: <value>
Health Notes: <advice>
"#,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::text_map::TextMap, medication::entities::MedicationRecord,
    };

    fn broccoli_rice() -> RecipeRequest {
        RecipeRequest {
            pantry_items: vec!["broccoli".to_string(), "rice".to_string()],
            dietary_preference: "vegan".to_string(),
            meal_type: Some("dinner".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn mentions_pantry_diet_and_meal() {
        let prompt =
            build_recipe_prompt(&broccoli_rice(), &PromptContext::default(), OutputFormat::Json)
                .unwrap();

        for term in ["broccoli", "rice", "vegan", "dinner", "Serves 2 people"] {
            assert!(prompt.contains(term), "prompt is missing {term}");
        }
        assert!(prompt.contains("\"additional_items_needed\""));
        assert!(!prompt.contains("Health considerations"));
    }

    #[test]
    fn is_deterministic() {
        let context = PromptContext::default();
        let first = build_recipe_prompt(&broccoli_rice(), &context, OutputFormat::Labeled).unwrap();
        let second = build_recipe_prompt(&broccoli_rice(), &context, OutputFormat::Labeled).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn labeled_contract_lists_every_header() {
        let prompt =
            build_recipe_prompt(&broccoli_rice(), &PromptContext::default(), OutputFormat::Labeled)
                .unwrap();

        for header in [
            "Recipe Name:",
            "Description:",
            "Prep Time:",
            "Cook Time:",
            "Servings:",
            "Ingredients:",
            "Instructions:",
            "Nutritional Info (per serving):",
            "Health Notes:",
        ] {
            assert!(prompt.contains(header), "prompt is missing {header}");
        }
    }

    #[test]
    fn includes_medications_and_their_avoid_foods() {
        let context = PromptContext {
            health_profile: None,
            medications: vec![MedicationRecord {
                id: "warfarin".to_string(),
                name: "Warfarin".to_string(),
                category: "blood_thinner".to_string(),
                avoid_foods: vec!["kale".to_string(), "grapefruit".to_string()],
                recommended_foods: vec![],
                vitamin_interactions: TextMap::new(),
                is_custom: false,
            }],
        };

        let prompt = build_recipe_prompt(&broccoli_rice(), &context, OutputFormat::Json).unwrap();
        assert!(prompt.contains("Takes Warfarin (avoid: kale, grapefruit)"));
    }

    #[test]
    fn empty_pantry_is_rejected() {
        let request = RecipeRequest {
            dietary_preference: "vegan".to_string(),
            ..Default::default()
        };

        let err = build_recipe_prompt(&request, &PromptContext::default(), OutputFormat::Json)
            .unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }
}
