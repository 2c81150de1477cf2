use crate::traits::Serializer;
use taskboard_core::{TaskboardError, TaskboardResult};

/// JSON serializer for stored values
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> TaskboardResult<String> {
        serde_json::to_string_pretty(data).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, text: &str) -> TaskboardResult<T> {
        serde_json::from_str(text).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }
}
