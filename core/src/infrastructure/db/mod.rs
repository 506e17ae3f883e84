pub mod errors;
pub mod json;
pub mod postgres;
