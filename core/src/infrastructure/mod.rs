pub mod crypto;
pub mod db;
pub mod health;
pub mod health_profile;
pub mod image;
pub mod ingredient;
pub mod jwt;
pub mod llm;
pub mod medication;
pub mod pantry;
pub mod recipe;
pub mod user;
