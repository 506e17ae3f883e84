use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, ports::IngredientRepository},
};

/// Starter catalog, grouped by category.
pub const INGREDIENT_CATALOG: &[(&str, &[&str])] = &[
    (
        "vegetables",
        &[
            "cucumber",
            "tomato",
            "onion",
            "garlic",
            "bell pepper",
            "hot pepper",
            "carrot",
            "broccoli",
            "spinach",
            "lettuce",
            "kale",
            "zucchini",
            "eggplant",
            "cauliflower",
            "mushroom",
            "pumpkin",
            "butternut squash",
            "sweet potato",
            "potato",
            "celery",
            "asparagus",
            "green beans",
        ],
    ),
    (
        "fruits",
        &[
            "apple",
            "banana",
            "orange",
            "lemon",
            "lime",
            "strawberry",
            "blueberry",
            "raspberry",
            "mango",
            "pineapple",
            "watermelon",
            "grapes",
            "avocado",
            "peach",
            "pear",
        ],
    ),
    (
        "grains",
        &[
            "rice",
            "red rice",
            "brown rice",
            "quinoa",
            "oatmeal",
            "oats",
            "pasta",
            "bread",
            "pizza bread",
            "tortilla",
            "couscous",
            "barley",
            "flour",
        ],
    ),
    (
        "proteins",
        &[
            "chickpeas",
            "black beans",
            "kidney beans",
            "lentils",
            "tofu",
            "tempeh",
            "edamame",
            "hummus",
            "peanut butter",
            "almond butter",
            "eggs",
            "chicken",
            "fish",
            "salmon",
            "tuna",
            "shrimp",
        ],
    ),
    (
        "dairy",
        &[
            "yogurt",
            "greek yogurt",
            "milk",
            "almond milk",
            "oat milk",
            "soy milk",
            "cheese",
            "cheddar cheese",
            "mozzarella",
            "parmesan",
            "feta cheese",
            "butter",
            "cream cheese",
        ],
    ),
    (
        "nuts_seeds",
        &[
            "almonds",
            "walnuts",
            "cashews",
            "pecans",
            "peanuts",
            "chia seeds",
            "flax seeds",
            "sunflower seeds",
            "pumpkin seeds",
        ],
    ),
    (
        "spices",
        &[
            "salt",
            "black pepper",
            "cumin",
            "paprika",
            "turmeric",
            "cinnamon",
            "oregano",
            "basil",
            "thyme",
            "rosemary",
            "ginger",
            "chili powder",
            "cayenne pepper",
        ],
    ),
    (
        "condiments",
        &[
            "olive oil",
            "vegetable oil",
            "coconut oil",
            "sesame oil",
            "soy sauce",
            "vinegar",
            "balsamic vinegar",
            "apple cider vinegar",
            "mustard",
            "ketchup",
            "mayonnaise",
            "hot sauce",
            "sriracha",
            "honey",
            "maple syrup",
            "agave nectar",
        ],
    ),
    (
        "canned",
        &[
            "canned tomatoes",
            "tomato paste",
            "tomato sauce",
            "coconut milk",
            "vegetable broth",
            "chicken broth",
        ],
    ),
];

pub fn catalog_ingredients() -> Vec<Ingredient> {
    INGREDIENT_CATALOG
        .iter()
        .flat_map(|(category, names)| names.iter().map(|name| Ingredient::new(name, category)))
        .collect()
}

/// Fills the ingredient table with the starter catalog when it is empty.
/// Returns the number of inserted rows.
pub async fn seed_ingredient_catalog<I>(repository: &I) -> Result<usize, CoreError>
where
    I: IngredientRepository,
{
    if repository.count().await? > 0 {
        return Ok(0);
    }

    let ingredients = catalog_ingredients();
    let inserted = ingredients.len();
    info!("Initializing ingredient catalog with {} ingredients", inserted);
    repository.create_many(ingredients).await?;

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_names_are_unique_and_lowercase() {
        let ingredients = catalog_ingredients();
        let names: HashSet<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names.len(), ingredients.len());
        assert!(ingredients.iter().all(|i| i.name == i.name.to_lowercase()));
    }

    #[test]
    fn catalog_covers_every_category() {
        let categories: HashSet<String> = catalog_ingredients()
            .into_iter()
            .map(|i| i.category)
            .collect();

        for expected in ["vegetables", "fruits", "grains", "proteins", "dairy", "spices"] {
            assert!(categories.contains(expected), "missing {expected}");
        }
    }
}
