pub mod authentication;
pub mod health;
pub mod health_profile;
pub mod ingredient;
pub mod medication;
pub mod pantry;
pub mod recipe;
pub mod server;
