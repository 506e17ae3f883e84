pub mod add_rating;
pub mod delete_recipe;
pub mod generate_recipe;
pub mod get_ratings;
pub mod get_recipe;
pub mod get_recipes;
pub mod set_favorite;
