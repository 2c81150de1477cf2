use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key the board is saved under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "kanbanBoard";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template used when nothing is stored yet and on reset (`kanban`, `priority`, `timeline`).
    #[serde(default)]
    pub default_template: Option<String>,
    /// Directory holding the file-backed key-value store.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub storage_key: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or unparsable.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn effective_default_template(&self) -> &str {
        self.default_template.as_deref().unwrap_or("kanban")
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("taskboard")))
            .unwrap_or_else(|| PathBuf::from(".taskboard"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_storage_key(), "kanbanBoard");
        assert_eq!(config.effective_default_template(), "kanban");
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            default_template = "timeline"
            data_dir = "/tmp/boards"
            "#,
        )
        .unwrap();
        assert_eq!(config.effective_default_template(), "timeline");
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/boards"));
        assert_eq!(config.effective_storage_key(), DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_load_from_missing_or_invalid_file() {
        let missing = std::env::temp_dir().join("taskboard-no-such-config.toml");
        assert!(AppConfig::load_from(&missing).default_template.is_none());

        let dir = std::env::temp_dir().join(format!("taskboard-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "default_template = [").unwrap();
        assert!(AppConfig::load_from(&path).default_template.is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
