use std::sync::Arc;
use taskboard_core::TaskboardResult;

/// String key-value storage, shaped like browser local storage.
/// Implementations handle the backend (memory, files, ...).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> TaskboardResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> TaskboardResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> TaskboardResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> TaskboardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TaskboardResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> TaskboardResult<()> {
        (**self).remove(key)
    }
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T>: Send + Sync {
    fn serialize(&self, data: &T) -> TaskboardResult<String>;

    fn deserialize(&self, text: &str) -> TaskboardResult<T>;
}
