pub mod custom_medication_repository;
pub mod user_medication_repository;
