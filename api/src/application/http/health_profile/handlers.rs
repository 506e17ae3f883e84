pub mod get_health_profile;
pub mod save_health_profile;
