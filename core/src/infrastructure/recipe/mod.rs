pub mod mappers;
pub mod repositories;

pub use repositories::{
    rating_repository::PostgresRatingRepository, recipe_repository::PostgresRecipeRepository,
};
