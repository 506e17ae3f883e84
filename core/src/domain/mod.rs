pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod health_profile;
pub mod ingredient;
pub mod jwt;
pub mod medication;
pub mod pantry;
pub mod recipe;
pub mod user;
