pub mod app_errors;
pub mod text_map;
