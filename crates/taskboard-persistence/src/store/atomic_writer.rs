use std::io::Write;
use std::path::Path;
use taskboard_core::{TaskboardError, TaskboardResult};

/// Atomic file writer that prevents data corruption
/// Writes to a temp file, then renames it over the target
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically.
    /// The temp file lives in the target's directory so the rename stays on one filesystem.
    pub fn write_atomic(path: &Path, data: &[u8]) -> TaskboardResult<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(path)
            .map_err(|e| TaskboardError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file as UTF-8 text
    pub fn read_to_string(path: &Path) -> TaskboardResult<String> {
        let data = std::fs::read_to_string(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
