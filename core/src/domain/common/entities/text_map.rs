use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// String-to-string mapping that keeps insertion order.
///
/// Backed by a `serde_json::Map` (built with `preserve_order`), so it serializes as a
/// plain JSON object. Re-inserting an existing key overwrites the value in place.
/// Decoding is lenient: numbers and booleans become strings, nulls are dropped and
/// nested values are kept as compact JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextMap(Map<String, Value>);

impl TextMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut map = Self::new();
        for (key, value) in object {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            if let Some(text) = value_to_text(value) {
                map.insert(key, text);
            }
        }
        map
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Scalar coercion shared by every lenient decoder in the crate.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

impl<K, V> FromIterator<(K, V)> for TextMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (K, V)>>(iter: It) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'de> Deserialize<'de> for TextMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(object) => Self::from_json_object(&object),
            _ => Self::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_insertion_order_and_overwrites_in_place() {
        let mut map = TextMap::new();
        map.insert("calories", "350");
        map.insert("protein", "12g");
        map.insert("calories", "400");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("calories", "400"), ("protein", "12g")]);
    }

    #[test]
    fn decoding_coerces_scalars_and_skips_nulls() {
        let map: TextMap =
            serde_json::from_value(json!({"calories": 420, "vegan": true, "fat": null, "fiber": "8g"}))
                .unwrap();

        assert_eq!(map.get("calories"), Some("420"));
        assert_eq!(map.get("vegan"), Some("true"));
        assert_eq!(map.get("fat"), None);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"calories":"420","vegan":"true","fiber":"8g"}"#);
    }
}
