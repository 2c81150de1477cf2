use crate::task::{is_valid_title, Priority, Task};
use serde::{Deserialize, Serialize};
use taskboard_core::Editable;

/// Partial update for a task. Fields left as `None` keep their current value.
///
/// # Example
///
/// ```
/// use taskboard_domain::{Priority, TaskUpdate};
///
/// let update = TaskUpdate::new()
///     .title("Ship it")
///     .priority(Priority::High);
/// assert!(update.description.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
    }

    /// An update that sets a blank title is declined as a whole.
    pub fn is_valid(&self) -> bool {
        self.title.as_deref().map_or(true, is_valid_title)
    }
}

impl Editable<Task> for TaskUpdate {
    fn from_entity(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            priority: Some(task.priority.clone()),
            tags: Some(task.tags.clone()),
        }
    }

    fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task::seeded("1", "Setup project", "Initialize", Priority::High, &["setup"])
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut task = sample();
        TaskUpdate::new().description("Bootstrap").apply_to(&mut task);

        assert_eq!(task.title, "Setup project");
        assert_eq!(task.description, "Bootstrap");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.tags, vec!["setup".to_string()]);
    }

    #[test]
    fn test_from_entity_is_identity_when_applied() {
        let original = sample();
        let mut task = original.clone();
        TaskUpdate::from_entity(&original).apply_to(&mut task);
        assert_eq!(task, original);
    }

    #[test]
    fn test_blank_title_is_invalid() {
        assert!(TaskUpdate::new().is_valid());
        assert!(TaskUpdate::new().title("x").is_valid());
        assert!(!TaskUpdate::new().title("  \t").is_valid());
    }

    #[test]
    fn test_is_empty() {
        assert!(TaskUpdate::new().is_empty());
        assert!(!TaskUpdate::new().tags(["a", "b"]).is_empty());
    }
}
