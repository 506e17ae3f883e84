use serde_json::json;

/// Response schema sent with JSON-contract generation requests.
pub fn recipe_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "item": { "type": "string" },
                        "amount": { "type": "string" }
                    },
                    "required": ["item", "amount"]
                }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "prep_time": { "type": "string" },
            "cook_time": { "type": "string" },
            "total_time": { "type": "string" },
            "servings": { "type": "integer" },
            "difficulty": {
                "type": "string",
                "enum": ["easy", "medium", "hard"]
            },
            "dietary_tags": {
                "type": "array",
                "items": { "type": "string" }
            },
            "meal_type": { "type": "string" },
            "nutritional_info": {
                "type": "object",
                "properties": {
                    "calories": { "type": "string" },
                    "protein": { "type": "string" },
                    "carbs": { "type": "string" },
                    "fat": { "type": "string" },
                    "fiber": { "type": "string" }
                }
            },
            "nutritional_benefits": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "benefit": { "type": "string" }
                    },
                    "required": ["ingredient", "benefit"]
                }
            },
            "health_warnings": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "warning": { "type": "string" }
                    },
                    "required": ["ingredient", "warning"]
                }
            },
            "health_notes": { "type": "string" },
            "additional_items_needed": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "title", "description", "ingredients", "instructions",
            "prep_time", "cook_time", "total_time", "servings", "difficulty"
        ]
    })
}
