use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// Unique-index violations become `Conflict`, everything else is logged as a server error.
pub fn map_insert_error(e: DbErr, action: &str, conflict_message: &str) -> CoreError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return CoreError::Conflict(conflict_message.to_string());
    }

    error!("Failed to {}: {}", action, e);
    CoreError::InternalServerError
}
