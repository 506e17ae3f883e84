use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GeneratedRecipe, OutputFormat, Recipe, RecipeTags},
        normalizer::normalize,
        ports::{ImageResolver, LLMClient},
        prompt::build_recipe_prompt,
        schema::recipe_response_schema,
        value_objects::{PromptContext, RecipeRequest},
    },
};

pub const IMAGE_FALLBACK_QUERY: &str = "healthy food";

/// Picks the image search terms: the title unless it is the placeholder, then the dish
/// type, then the meal type, then a generic query.
pub fn image_query(recipe: &GeneratedRecipe, request: &RecipeRequest) -> String {
    if !recipe.has_placeholder_title() && !recipe.title.trim().is_empty() {
        return recipe.title.trim().to_string();
    }

    request
        .dish_type()
        .or_else(|| request.meal_type.as_deref().map(str::trim).filter(|m| !m.is_empty()))
        .unwrap_or(IMAGE_FALLBACK_QUERY)
        .to_string()
}

/// Prompt, generate, normalize and illustrate a recipe for `user_id`.
///
/// Nothing is persisted here. Validation happens before the generator is called.
pub async fn generate_recipe_record<LLM, IMG>(
    llm_client: &LLM,
    image_resolver: &IMG,
    user_id: Uuid,
    request: &RecipeRequest,
    context: &PromptContext,
    format: OutputFormat,
) -> Result<Recipe, CoreError>
where
    LLM: LLMClient,
    IMG: ImageResolver,
{
    request.validate()?;

    let prompt = build_recipe_prompt(request, context, format)?;
    let response_schema = match format {
        OutputFormat::Json => Some(recipe_response_schema()),
        OutputFormat::Labeled => None,
    };

    let raw = llm_client.generate(prompt, response_schema).await?;

    let generated = normalize(&raw, format, request.servings()).map_err(|e| {
        error!(raw = %e.raw, "Failed to parse generated recipe: {}", e.reason);
        CoreError::from(e)
    })?;

    if generated.fallback_used {
        warn!(recipe_id = %generated.id, "generated recipe only partially parsed");
    }

    let image_url = image_resolver
        .resolve(image_query(&generated, request))
        .await;

    let tags = RecipeTags {
        meal_type: request.meal_type().to_string(),
        dish_type: request.dish_type().map(str::to_string),
        diet_type: request.diet_type().map(str::to_string),
    };

    Ok(Recipe::from_generated(generated, user_id, tags, image_url))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::recipe::{entities::PLACEHOLDER_TITLE, normalizer::DEFAULT_LABELED_SERVINGS};

    struct ScriptedGenerator {
        reply: Result<String, CoreError>,
        calls: Mutex<Vec<(String, bool)>>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: CoreError) -> Self {
            Self {
                reply: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl LLMClient for ScriptedGenerator {
        async fn generate(
            &self,
            prompt: String,
            response_schema: Option<serde_json::Value>,
        ) -> Result<String, CoreError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt, response_schema.is_some()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingImages {
        queries: Mutex<Vec<String>>,
    }

    impl ImageResolver for RecordingImages {
        async fn resolve(&self, query: String) -> String {
            self.queries.lock().unwrap().push(query);
            "https://images.example.com/dish.jpg".to_string()
        }
    }

    fn broccoli_rice() -> RecipeRequest {
        RecipeRequest {
            pantry_items: vec!["broccoli".to_string(), "rice".to_string()],
            dietary_preference: "vegan".to_string(),
            meal_type: Some("dinner".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn broccoli_rice_scenario() {
        let generator = ScriptedGenerator::replying(
            r#"{"title":"Veggie Rice Bowl","ingredients":[{"item":"rice","amount":"1 cup"}],"instructions":["Cook rice"]}"#,
        );
        let images = RecordingImages::default();
        let user_id = Uuid::new_v4();

        let recipe = generate_recipe_record(
            &generator,
            &images,
            user_id,
            &broccoli_rice(),
            &PromptContext::default(),
            OutputFormat::Json,
        )
        .await
        .unwrap();

        assert_eq!(recipe.title, "Veggie Rice Bowl");
        assert_eq!(recipe.instructions.len(), 1);
        assert_eq!(recipe.user_id, user_id);
        assert_eq!(recipe.meal_type, "dinner");
        assert_eq!(recipe.image_url, "https://images.example.com/dish.jpg");
        assert!(!recipe.is_favorite);

        let calls = generator.calls.lock().unwrap();
        let (prompt, with_schema) = &calls[0];
        for term in ["broccoli", "rice", "vegan", "dinner"] {
            assert!(prompt.contains(term));
        }
        assert!(*with_schema);
        assert_eq!(*images.queries.lock().unwrap(), vec!["Veggie Rice Bowl"]);
    }

    #[tokio::test]
    async fn empty_pantry_never_reaches_the_generator() {
        let generator = ScriptedGenerator::replying("{}");
        let request = RecipeRequest {
            dietary_preference: "vegan".to_string(),
            ..Default::default()
        };

        let err = generate_recipe_record(
            &generator,
            &RecordingImages::default(),
            Uuid::new_v4(),
            &request,
            &PromptContext::default(),
            OutputFormat::Json,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
        assert!(generator.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn undecodable_json_is_a_generation_error() {
        let images = RecordingImages::default();

        let err = generate_recipe_record(
            &ScriptedGenerator::replying("Sure! Here's a lovely bowl of rice."),
            &images,
            Uuid::new_v4(),
            &broccoli_rice(),
            &PromptContext::default(),
            OutputFormat::Json,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::GenerationParse(_)));
        assert!(images.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failures_propagate() {
        let err = generate_recipe_record(
            &ScriptedGenerator::failing(CoreError::ExternalServiceError("timeout".to_string())),
            &RecordingImages::default(),
            Uuid::new_v4(),
            &broccoli_rice(),
            &PromptContext::default(),
            OutputFormat::Json,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn labeled_output_degrades_instead_of_failing() {
        let generator = ScriptedGenerator::replying("I would simply steam the broccoli.");
        let images = RecordingImages::default();

        let recipe = generate_recipe_record(
            &generator,
            &images,
            Uuid::new_v4(),
            &broccoli_rice(),
            &PromptContext::default(),
            OutputFormat::Labeled,
        )
        .await
        .unwrap();

        assert!(recipe.fallback_used);
        assert_eq!(recipe.title, PLACEHOLDER_TITLE);
        assert_eq!(recipe.servings, DEFAULT_LABELED_SERVINGS);
        assert!(!generator.calls.lock().unwrap()[0].1);
        assert_eq!(*images.queries.lock().unwrap(), vec!["dinner"]);
    }

    #[test]
    fn image_query_precedence() {
        let mut recipe = GeneratedRecipe::empty(OutputFormat::Json, 2);
        let mut request = RecipeRequest::default();
        assert_eq!(image_query(&recipe, &request), "healthy food");

        request.meal_type = Some("lunch".to_string());
        assert_eq!(image_query(&recipe, &request), "lunch");

        request.dish_type = Some("salad".to_string());
        assert_eq!(image_query(&recipe, &request), "salad");

        recipe.title = "Kale Caesar".to_string();
        assert_eq!(image_query(&recipe, &request), "Kale Caesar");
    }
}
