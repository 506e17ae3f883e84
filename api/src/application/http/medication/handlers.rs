pub mod add_custom_medication;
pub mod add_user_medication;
pub mod get_food_recommendations;
pub mod list_medications;
pub mod list_user_medications;
pub mod remove_user_medication;
