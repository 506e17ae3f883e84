pub mod entities;
pub mod helpers;
pub mod normalizer;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;
