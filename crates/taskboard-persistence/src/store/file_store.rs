use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use std::path::{Path, PathBuf};
use taskboard_core::TaskboardResult;

/// Key-value store keeping one JSON file per key in a directory.
/// Writes are atomic; the directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TaskboardResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        AtomicWriter::read_to_string(&path).map(Some)
    }

    fn set(&self, key: &str, value: &str) -> TaskboardResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        AtomicWriter::write_atomic(&self.path_for(key), value.as_bytes())
    }

    fn remove(&self, key: &str) -> TaskboardResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
