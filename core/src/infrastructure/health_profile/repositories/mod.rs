pub mod health_profile_repository;
