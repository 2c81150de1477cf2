use crate::board::Board;
use crate::task::{Priority, Task};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskboard_core::TaskboardError;

/// Board layouts a user can pick from. Each has a fixed column set and a
/// seed board used on first start and on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Kanban,
    Priority,
    Timeline,
}

impl Template {
    pub const ALL: [Template; 3] = [Self::Kanban, Self::Priority, Self::Timeline];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kanban => "kanban",
            Self::Priority => "priority",
            Self::Timeline => "timeline",
        }
    }

    pub fn column_ids(self) -> &'static [&'static str] {
        match self {
            Self::Kanban => &["todo", "in-progress", "review", "done"],
            Self::Priority => &["critical", "high", "medium", "low"],
            Self::Timeline => &["this-week", "this-month", "q1"],
        }
    }

    pub fn default_board(self) -> Board {
        let columns: Vec<Vec<Task>> = match self {
            Self::Kanban => vec![
                vec![
                    Task::seeded("1", "Setup project", "Initialize React project", Priority::High, &["setup", "urgent"]),
                    Task::seeded("2", "Design mockups", "Create UI designs", Priority::Medium, &["design"]),
                ],
                vec![
                    Task::seeded("3", "Build components", "Create React components", Priority::High, &["development"]),
                    Task::seeded("4", "Add drag-drop", "Implement draggable items", Priority::High, &["feature", "development"]),
                ],
                vec![Task::seeded("5", "Code review", "Review PR changes", Priority::Medium, &["review"])],
                vec![Task::seeded("6", "Setup Git", "Initialize repository", Priority::High, &["completed"])],
            ],
            Self::Priority => vec![
                vec![Task::seeded("1", "Fix production bug", "Urgent bug fix needed", Priority::Critical, &["bug", "critical"])],
                vec![Task::seeded("2", "New feature A", "Feature implementation", Priority::High, &["feature"])],
                vec![Task::seeded("3", "Refactor code", "Clean up code", Priority::Medium, &["refactor"])],
                vec![Task::seeded("4", "Documentation", "Update docs", Priority::Low, &["docs"])],
            ],
            Self::Timeline => vec![
                vec![Task::seeded("1", "Sprint planning", "Plan sprint tasks", Priority::High, &["planning"])],
                vec![Task::seeded("2", "Release v2.0", "Major release", Priority::High, &["release"])],
                vec![Task::seeded("3", "Strategic goals", "Quarterly objectives", Priority::Medium, &["goals"])],
            ],
        };

        Board::from_columns(
            self.column_ids()
                .iter()
                .map(|id| id.to_string())
                .zip(columns),
        )
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kanban" => Ok(Self::Kanban),
            "priority" => Ok(Self::Priority),
            "timeline" => Ok(Self::Timeline),
            other => Err(TaskboardError::Validation(format!(
                "unknown template '{}', expected one of kanban, priority, timeline",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boards_match_column_sets() {
        for template in Template::ALL {
            let board = template.default_board();
            let columns: Vec<&str> = board.column_ids().map(String::as_str).collect();
            assert_eq!(columns, template.column_ids());
            assert!(board.has_unique_task_ids());
        }
    }

    #[test]
    fn test_kanban_seed() {
        let board = Template::Kanban.default_board();
        assert_eq!(board.task_count(), 6);
        let first = &board.tasks("todo")[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.title, "Setup project");
        assert_eq!(first.tags, vec!["setup".to_string(), "urgent".to_string()]);
        assert_eq!(board.tasks("done")[0].title, "Setup Git");
    }

    #[test]
    fn test_seed_boards_are_deterministic() {
        assert_eq!(Template::Timeline.default_board(), Template::Timeline.default_board());
        assert_ne!(Template::Kanban.default_board(), Template::Priority.default_board());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Priority".parse::<Template>().unwrap(), Template::Priority);
        assert_eq!(" timeline ".parse::<Template>().unwrap(), Template::Timeline);
        assert!("scrum".parse::<Template>().is_err());
        assert_eq!(Template::Kanban.to_string(), "kanban");
    }
}
