//! Turns raw generator output into a [`GeneratedRecipe`].
//!
//! Two contracts are supported. JSON output (`OutputFormat::Json`) must decode to an
//! object or the whole generation fails. Labeled text (`OutputFormat::Labeled`) never
//! fails: whatever can be recognised is kept and the rest falls back to sentinel values,
//! flagged through `fallback_used`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{
    common::entities::text_map::{TextMap, value_to_text},
    recipe::entities::{
        Difficulty, GeneratedRecipe, HealthWarning, NutritionalBenefit, OutputFormat,
        PLACEHOLDER_TITLE, RecipeIngredient,
    },
};

pub const INGREDIENT_PARSE_SENTINEL: &str = "Unable to parse ingredients from response";
pub const DEFAULT_LABELED_SERVINGS: u32 = 4;

const BULLETS: &[&str] = &["â€¢", "•", "-", "*"];

static STEP_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").ok());

/// Generator output that should have been JSON but was not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse generated recipe: {reason}")]
pub struct GenerationParseError {
    pub raw: String,
    pub reason: String,
}

pub fn normalize(
    raw: &str,
    format: OutputFormat,
    default_servings: u32,
) -> Result<GeneratedRecipe, GenerationParseError> {
    match format {
        OutputFormat::Json => parse_json_recipe(raw, default_servings),
        OutputFormat::Labeled => Ok(parse_labeled_recipe(raw)),
    }
}

/// Removes a surrounding markdown code fence and its language tag, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };

    let inner = inner
        .strip_prefix("json")
        .or_else(|| inner.strip_prefix("JSON"))
        .unwrap_or(inner);

    match inner.find("```") {
        Some(end) => inner[..end].trim(),
        None => inner.trim(),
    }
}

pub fn parse_json_recipe(
    raw: &str,
    default_servings: u32,
) -> Result<GeneratedRecipe, GenerationParseError> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| GenerationParseError {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;

    let Value::Object(object) = value else {
        return Err(GenerationParseError {
            raw: raw.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    };

    let mut recipe = GeneratedRecipe::empty(OutputFormat::Json, default_servings);

    if let Some(title) = text_field(&object, "title") {
        recipe.title = title;
    }
    recipe.description = text_field(&object, "description").unwrap_or_default();
    recipe.ingredients = json_ingredients(object.get("ingredients"));
    recipe.instructions = json_instructions(object.get("instructions"));
    recipe.prep_time = text_field(&object, "prep_time").unwrap_or_default();
    recipe.cook_time = text_field(&object, "cook_time").unwrap_or_default();
    recipe.total_time = text_field(&object, "total_time").unwrap_or_default();
    recipe.servings = object
        .get("servings")
        .and_then(json_servings)
        .unwrap_or(default_servings);
    recipe.difficulty = text_field(&object, "difficulty")
        .map(|d| Difficulty::from_text(&d))
        .unwrap_or_default();
    recipe.dietary_tags = dedup_tags(string_list(object.get("dietary_tags")));
    recipe.nutritional_info = text_map(object.get("nutritional_info"));
    recipe.nutritional_benefits = pairs(object.get("nutritional_benefits"), "benefit")
        .into_iter()
        .map(|(ingredient, benefit)| NutritionalBenefit { ingredient, benefit })
        .collect();
    recipe.health_warnings = pairs(object.get("health_warnings"), "warning")
        .into_iter()
        .map(|(ingredient, warning)| HealthWarning { ingredient, warning })
        .collect();
    recipe.condition_suitability = text_map(object.get("condition_suitability"));
    recipe.health_notes = text_field(&object, "health_notes");
    recipe.additional_items_needed = string_list(object.get("additional_items_needed"));

    if recipe.instructions.is_empty() {
        recipe.instructions = vec![raw.trim().to_string()];
        recipe.fallback_used = true;
    }

    Ok(recipe)
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(value_to_text)
        .filter(|text| !text.is_empty())
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(value_to_text)
            .filter(|item| !item.is_empty())
            .collect(),
        Some(Value::String(text)) if !text.trim().is_empty() => vec![text.trim().to_string()],
        _ => Vec::new(),
    }
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            unique.push(tag);
        }
    }
    unique
}

fn text_map(value: Option<&Value>) -> TextMap {
    match value {
        Some(Value::Object(object)) => TextMap::from_json_object(object),
        _ => TextMap::new(),
    }
}

fn json_ingredients(value: Option<&Value>) -> Vec<RecipeIngredient> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(fields) => {
                let item = text_field(fields, "item")
                    .or_else(|| text_field(fields, "name"))
                    .or_else(|| text_field(fields, "ingredient"))?;
                let amount = text_field(fields, "amount")
                    .or_else(|| text_field(fields, "quantity"))
                    .unwrap_or_default();
                Some(RecipeIngredient::new(item, amount))
            }
            other => value_to_text(other)
                .filter(|item| !item.is_empty())
                .map(|item| RecipeIngredient::new(item, "")),
        })
        .collect()
}

fn json_instructions(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(steps)) => steps
            .iter()
            .filter_map(|step| match step {
                Value::Object(fields) => {
                    text_field(fields, "text").or_else(|| text_field(fields, "step"))
                }
                other => value_to_text(other),
            })
            .filter(|step| !step.is_empty())
            .collect(),
        Some(Value::String(text)) => text
            .lines()
            .map(|line| strip_step_number(line.trim()).to_string())
            .filter(|line| !line.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn json_servings(value: &Value) -> Option<u32> {
    let servings = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => leading_integer(text),
        _ => None,
    }?;
    (servings > 0).then_some(servings)
}

fn pairs(value: Option<&Value>, detail_key: &str) -> Vec<(String, String)> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let Value::Object(fields) = entry else {
                return None;
            };
            let ingredient = text_field(fields, "ingredient")?;
            let detail = text_field(fields, detail_key)?;
            Some((ingredient, detail))
        })
        .collect()
}

fn leading_integer(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLETS
        .iter()
        .find_map(|bullet| line.strip_prefix(bullet))
        .map(str::trim)
}

fn strip_step_number(line: &str) -> &str {
    match STEP_NUMBER.as_ref().and_then(|re| re.find(line)) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}

fn starts_with_step_number(line: &str) -> bool {
    STEP_NUMBER.as_ref().is_some_and(|re| re.is_match(line))
}

/// Section of a labeled response the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Ingredients,
    Instructions,
    Nutrition,
}

/// Line-driven parser for the labeled text contract.
pub struct LabeledRecipeParser {
    section: Section,
    recipe: GeneratedRecipe,
    title_seen: bool,
}

impl Default for LabeledRecipeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LabeledRecipeParser {
    pub fn new() -> Self {
        Self {
            section: Section::None,
            recipe: GeneratedRecipe::empty(OutputFormat::Labeled, DEFAULT_LABELED_SERVINGS),
            title_seen: false,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || self.apply_header(line) {
            return;
        }

        match self.section {
            Section::None => {}
            Section::Ingredients => {
                if let Some(item) = strip_bullet(line).filter(|item| !item.is_empty()) {
                    self.recipe
                        .ingredients
                        .push(RecipeIngredient::new(item, ""));
                }
            }
            Section::Instructions => {
                let step = if starts_with_step_number(line) {
                    Some(strip_step_number(line))
                } else {
                    line.strip_prefix('-').map(str::trim)
                };
                if let Some(step) = step.filter(|step| !step.is_empty()) {
                    self.recipe.instructions.push(step.to_string());
                }
            }
            Section::Nutrition => {
                if let Some((name, value)) = line.split_once(':') {
                    let name = strip_bullet(name).unwrap_or(name).trim();
                    if !name.is_empty() {
                        self.recipe.nutritional_info.insert(name, value.trim());
                    }
                }
            }
        }
    }

    /// Returns `true` when the line was a header and has been consumed.
    fn apply_header(&mut self, line: &str) -> bool {
        if let Some(rest) = line.strip_prefix("Recipe Name:") {
            let title = rest.trim();
            if !title.is_empty() {
                self.recipe.title = title.to_string();
                self.title_seen = true;
            }
        } else if let Some(rest) = line.strip_prefix("Description:") {
            self.recipe.description = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Prep Time:") {
            self.recipe.prep_time = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Cook Time:") {
            self.recipe.cook_time = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Total Time:") {
            self.recipe.total_time = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Difficulty:") {
            self.recipe.difficulty = Difficulty::from_text(rest);
        } else if let Some(rest) = line.strip_prefix("Servings:") {
            self.recipe.servings = leading_integer(rest)
                .filter(|servings| *servings > 0)
                .unwrap_or(DEFAULT_LABELED_SERVINGS);
        } else if let Some(rest) = line.strip_prefix("Health Notes:") {
            let notes = rest.trim();
            self.recipe.health_notes = (!notes.is_empty()).then(|| notes.to_string());
            self.section = Section::None;
        } else if line.starts_with("Ingredients:") {
            self.section = Section::Ingredients;
        } else if line.starts_with("Instructions:") {
            self.section = Section::Instructions;
        } else if line.starts_with("Nutritional Info") {
            self.section = Section::Nutrition;
        } else {
            return false;
        }

        true
    }

    pub fn finish(mut self, raw: &str) -> GeneratedRecipe {
        if self.recipe.ingredients.is_empty() {
            self.recipe.ingredients = vec![RecipeIngredient::new(INGREDIENT_PARSE_SENTINEL, "")];
            self.recipe.fallback_used = true;
        }

        if self.recipe.instructions.is_empty() {
            self.recipe.instructions = vec![raw.to_string()];
            self.recipe.fallback_used = true;
        }

        if !self.title_seen {
            self.recipe.title = PLACEHOLDER_TITLE.to_string();
        }

        self.recipe
    }
}

pub fn parse_labeled_recipe(raw: &str) -> GeneratedRecipe {
    let mut parser = LabeledRecipeParser::new();
    for line in raw.lines() {
        parser.feed_line(line);
    }
    parser.finish(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELED: &str = "Recipe Name: Lemon Garlic Pasta
Description: Bright weeknight pasta.
Prep Time: 10 minutes
Cook Time: 15 minutes
Servings: 3 people

Ingredients:
- 200g pasta
* 2 cloves garlic
â€¢ 1 lemon
• olive oil
Instructions:
1. Boil the pasta.
2. Sauté the garlic.
10. Toss with lemon.
- Serve warm.
Nutritional Info (per serving):
- Calories: 420
- Protein: 12g
Protein: 14g
Health Notes: Contains gluten.
- this line is ignored
";

    #[test]
    fn json_scenario_keeps_title_and_single_step() {
        let raw = r#"{"title":"Veggie Rice Bowl","ingredients":[{"item":"rice","amount":"1 cup"}],"instructions":["Cook rice"]}"#;

        let recipe = parse_json_recipe(raw, 2).unwrap();

        assert_eq!(recipe.title, "Veggie Rice Bowl");
        assert_eq!(recipe.instructions, vec!["Cook rice"]);
        assert_eq!(recipe.ingredients, vec![RecipeIngredient::new("rice", "1 cup")]);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert!(recipe.additional_items_needed.is_empty());
        assert!(!recipe.fallback_used);
    }

    #[test]
    fn json_recovers_every_documented_field() {
        let raw = r#"```json
{
  "title": "Chickpea Curry",
  "description": "Warm and filling.",
  "ingredients": [{"name": "chickpeas", "quantity": "1 can"}, "salt"],
  "instructions": ["Simmer", "Serve"],
  "prep_time": "10 minutes",
  "cook_time": 25,
  "total_time": "35 minutes",
  "servings": "4 people",
  "difficulty": "Easy",
  "dietary_tags": ["vegan", "Vegan", "gluten-free"],
  "meal_type": "dinner",
  "nutritional_info": {"calories": 410, "protein": "15g"},
  "nutritional_benefits": [{"ingredient": "chickpeas", "benefit": "fiber"}],
  "health_warnings": [{"ingredient": "salt", "warning": "watch sodium"}, {"oops": 1}],
  "condition_suitability": {"hypertension": "use less salt"},
  "additional_items_needed": ["coconut milk"],
  "unknown_field": true
}
```"#;

        let recipe = parse_json_recipe(raw, 2).unwrap();

        assert_eq!(recipe.title, "Chickpea Curry");
        assert_eq!(recipe.description, "Warm and filling.");
        assert_eq!(
            recipe.ingredients,
            vec![
                RecipeIngredient::new("chickpeas", "1 can"),
                RecipeIngredient::new("salt", ""),
            ]
        );
        assert_eq!(recipe.instructions, vec!["Simmer", "Serve"]);
        assert_eq!(recipe.cook_time, "25");
        assert_eq!(recipe.total_time, "35 minutes");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.dietary_tags, vec!["vegan", "gluten-free"]);
        assert_eq!(recipe.nutritional_info.get("calories"), Some("410"));
        assert_eq!(recipe.nutritional_benefits.len(), 1);
        assert_eq!(recipe.health_warnings.len(), 1);
        assert_eq!(
            recipe.condition_suitability.get("hypertension"),
            Some("use less salt")
        );
        assert_eq!(recipe.additional_items_needed, vec!["coconut milk"]);
        assert_eq!(recipe.output_format, OutputFormat::Json);
    }

    #[test]
    fn json_failures_never_yield_a_record() {
        for raw in [
            "Here is your recipe: Veggie Bowl",
            r#"{"title": "Veggie Rice Bowl", "instructions": ["Cook"#,
            "[1, 2, 3]",
            "\"just a string\"",
            "",
        ] {
            let err = parse_json_recipe(raw, 2).unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn json_without_instructions_falls_back_to_raw_text() {
        let raw = r#"{"title": "", "instructions": []}"#;

        let recipe = parse_json_recipe(raw, 3).unwrap();

        assert_eq!(recipe.title, PLACEHOLDER_TITLE);
        assert_eq!(recipe.instructions, vec![raw]);
        assert!(recipe.fallback_used);
    }

    #[test]
    fn fence_stripping_handles_tags_and_trailing_text() {
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  ```\n{\"a\":1}\n```  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{}\n```\nEnjoy!"), "{}");
        assert_eq!(strip_code_fence("{}"), "{}");
    }

    #[test]
    fn labeled_parses_a_well_formed_response() {
        let recipe = parse_labeled_recipe(LABELED);

        assert_eq!(recipe.title, "Lemon Garlic Pasta");
        assert_eq!(recipe.description, "Bright weeknight pasta.");
        assert_eq!(recipe.prep_time, "10 minutes");
        assert_eq!(recipe.cook_time, "15 minutes");
        assert_eq!(recipe.servings, 3);
        let items: Vec<&str> = recipe.ingredients.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(items, vec!["200g pasta", "2 cloves garlic", "1 lemon", "olive oil"]);
        assert!(recipe.ingredients.iter().all(|i| i.amount.is_empty()));
        assert_eq!(
            recipe.instructions,
            vec!["Boil the pasta.", "Sauté the garlic.", "Toss with lemon.", "Serve warm."]
        );
        let nutrition: Vec<_> = recipe.nutritional_info.iter().collect();
        assert_eq!(nutrition, vec![("Calories", "420"), ("Protein", "14g")]);
        assert_eq!(recipe.health_notes.as_deref(), Some("Contains gluten."));
        assert!(!recipe.fallback_used);
        assert_eq!(recipe.output_format, OutputFormat::Labeled);
    }

    #[test]
    fn labeled_parsing_is_idempotent() {
        let mut first = parse_labeled_recipe(LABELED);
        let second = parse_labeled_recipe(LABELED);

        first.id = second.id;
        assert_eq!(first, second);
    }

    #[test]
    fn empty_ingredient_section_yields_the_sentinel() {
        let recipe = parse_labeled_recipe("Recipe Name: Toast\nIngredients:\nInstructions:\n1. Toast bread.");

        assert_eq!(
            recipe.ingredients,
            vec![RecipeIngredient::new(INGREDIENT_PARSE_SENTINEL, "")]
        );
        assert_eq!(recipe.instructions, vec!["Toast bread."]);
        assert!(recipe.fallback_used);
    }

    #[test]
    fn missing_instructions_keep_the_raw_text_as_one_step() {
        let raw = "Recipe Name: Mystery Stew\nIngredients:\n- beans\nJust simmer everything.";

        let recipe = parse_labeled_recipe(raw);

        assert_eq!(recipe.instructions, vec![raw]);
        assert!(recipe.fallback_used);
    }

    #[test]
    fn unstructured_text_still_produces_a_record() {
        let raw = "Sorry, I can only suggest eating the rice plain.";

        let recipe = normalize(raw, OutputFormat::Labeled, 2).unwrap();

        assert_eq!(recipe.title, PLACEHOLDER_TITLE);
        assert_eq!(recipe.ingredients[0].item, INGREDIENT_PARSE_SENTINEL);
        assert_eq!(recipe.instructions, vec![raw]);
        assert_eq!(recipe.servings, DEFAULT_LABELED_SERVINGS);
    }

    #[test]
    fn servings_default_to_four_for_non_numeric_text() {
        for line in ["Servings: four", "Servings:", "Servings: about 3", "Servings: 0"] {
            let recipe = parse_labeled_recipe(line);
            assert_eq!(recipe.servings, 4, "{line}");
        }
        assert_eq!(parse_labeled_recipe("Servings: 6 bowls").servings, 6);
    }

    #[test]
    fn health_notes_close_the_current_section() {
        let mut parser = LabeledRecipeParser::new();
        parser.feed_line("Ingredients:");
        assert_eq!(parser.section(), Section::Ingredients);

        parser.feed_line("Health Notes: low sodium");
        assert_eq!(parser.section(), Section::None);

        parser.feed_line("- stray bullet");
        let recipe = parser.finish("raw");
        assert_eq!(recipe.ingredients[0].item, INGREDIENT_PARSE_SENTINEL);
    }

    #[test]
    fn scalar_headers_inside_a_list_keep_the_section_open() {
        let mut parser = LabeledRecipeParser::new();
        for line in ["Recipe Name: X", "Ingredients:", "- rice", "Prep Time: 5 minutes"] {
            parser.feed_line(line);
        }
        assert_eq!(parser.section(), Section::Ingredients);

        for line in ["- beans", "Servings: 2", "Instructions:", "1. Cook."] {
            parser.feed_line(line);
        }
        let recipe = parser.finish("raw");

        let items: Vec<&str> = recipe.ingredients.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(items, vec!["rice", "beans"]);
        assert_eq!(recipe.prep_time, "5 minutes");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.instructions, vec!["Cook."]);
        assert!(!recipe.fallback_used);
    }

    #[test]
    fn headers_are_case_sensitive() {
        let recipe = parse_labeled_recipe("recipe name: Lowercase\nINGREDIENTS:\n- rice");

        assert_eq!(recipe.title, PLACEHOLDER_TITLE);
        assert_eq!(recipe.ingredients[0].item, INGREDIENT_PARSE_SENTINEL);
    }
}
