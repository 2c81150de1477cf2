use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type TaskId = String;

/// Task priority. Values outside the known four are kept verbatim so that
/// stored boards written by other tools survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Creates a task with a fresh random id and no tags.
    pub fn new(title: String, description: String, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            priority,
            tags: Vec::new(),
        }
    }

    /// Builds a task with a caller-chosen id, as the template seeds do.
    pub fn seeded(id: &str, title: &str, description: &str, priority: Priority, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            priority,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    pub fn has_valid_title(&self) -> bool {
        is_valid_title(&self.title)
    }
}

/// Titles must contain something other than whitespace.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}
