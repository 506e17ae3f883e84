pub mod mappers;
pub mod repositories;

pub use repositories::health_profile_repository::PostgresHealthProfileRepository;
