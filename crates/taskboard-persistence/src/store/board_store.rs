use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use taskboard_core::config::DEFAULT_STORAGE_KEY;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Board, BoardPersistence};

/// Saves and loads the board as a bare JSON mapping under one key of a
/// key-value store.
#[derive(Debug)]
pub struct BoardStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BoardStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStore> BoardPersistence for BoardStore<S> {
    /// A stored value that does not parse as a board, or that repeats a task
    /// id, is an error.
    fn load(&self) -> TaskboardResult<Option<Board>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let board: Board = JsonSerializer.deserialize(&raw)?;
        if !board.has_unique_task_ids() {
            return Err(TaskboardError::Validation(
                "stored board repeats task ids".to_string(),
            ));
        }

        tracing::info!("Loaded {} bytes from key {}", raw.len(), self.key);
        Ok(Some(board))
    }

    fn save(&self, board: &Board) -> TaskboardResult<()> {
        let text = JsonSerializer.serialize(board)?;
        self.store.set(&self.key, &text)?;
        tracing::debug!("Saved {} bytes to key {}", text.len(), self.key);
        Ok(())
    }
}
