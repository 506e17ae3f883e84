pub mod mappers;
pub mod repositories;

pub use repositories::pantry_repository::PostgresPantryRepository;
