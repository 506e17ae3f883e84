pub mod add_pantry_item;
pub mod clear_pantry;
pub mod get_pantry;
pub mod remove_pantry_item;
