use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TaskboardError {
    /// True for errors raised while reading or writing the backing store.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Storage(_))
    }
}
