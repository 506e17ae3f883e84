use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::common::entities::app_errors::CoreError;

/// Decodes a JSONB column, falling back to the type's default for missing or legacy
/// shapes instead of failing the whole read.
pub fn decode_or_default<T>(value: &Value, column: &str) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }

    serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        warn!(column, "Unreadable JSON column, using default: {}", e);
        T::default()
    })
}

pub fn encode<T: Serialize>(value: &T, column: &str) -> Result<Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!(column, "Failed to encode JSON column: {}", e);
        CoreError::InternalServerError
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn legacy_shapes_fall_back_to_defaults() {
        let tags: Vec<String> = decode_or_default(&json!("vegan"), "dietary_tags");
        assert!(tags.is_empty());

        let tags: Vec<String> = decode_or_default(&Value::Null, "dietary_tags");
        assert!(tags.is_empty());

        let tags: Vec<String> = decode_or_default(&json!(["vegan"]), "dietary_tags");
        assert_eq!(tags, vec!["vegan"]);
    }
}
