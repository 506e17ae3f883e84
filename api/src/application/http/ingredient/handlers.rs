pub mod create_ingredient;
pub mod get_categories;
pub mod get_ingredients;
