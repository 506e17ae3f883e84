pub mod mappers;
pub mod repositories;

pub use repositories::{
    custom_medication_repository::PostgresCustomMedicationRepository,
    user_medication_repository::PostgresUserMedicationRepository,
};
