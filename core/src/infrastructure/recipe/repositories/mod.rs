pub mod rating_repository;
pub mod recipe_repository;
