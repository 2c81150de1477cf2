use super::Command;
use crate::{Board, ColumnId, Priority, Task, TaskId, TaskUpdate};

/// Create a new task at the end of a column.
///
/// The task (and its id) is built when the command is built, so the caller
/// knows the id before the command runs.
pub struct AddTask {
    pub column_id: ColumnId,
    pub task: Task,
}

impl AddTask {
    pub fn new(
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            task: Task::new(title.into(), description.into(), priority),
        }
    }

    /// A task with only a title, using the default description and priority.
    pub fn titled(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self::new(column_id, title, String::new(), Priority::default())
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task.id
    }
}

impl Command for AddTask {
    fn execute(&self, board: &Board) -> Option<Board> {
        board.try_push_task(&self.column_id, self.task.clone())
    }

    fn description(&self) -> String {
        format!("Add task '{}' to {}", self.task.title, self.column_id)
    }
}

/// Merge partial fields into a task found in one column.
pub struct UpdateTask {
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub update: TaskUpdate,
}

impl Command for UpdateTask {
    fn execute(&self, board: &Board) -> Option<Board> {
        board.try_update_task(&self.column_id, &self.task_id, self.update.clone())
    }

    fn description(&self) -> String {
        format!("Update task {} in {}", self.task_id, self.column_id)
    }
}

pub struct DeleteTask {
    pub column_id: ColumnId,
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, board: &Board) -> Option<Board> {
        board.try_delete_task(&self.column_id, &self.task_id)
    }

    fn description(&self) -> String {
        format!("Delete task {} from {}", self.task_id, self.column_id)
    }
}

/// Move a task between positions, possibly across columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTask {
    pub from_column: ColumnId,
    pub to_column: ColumnId,
    pub from_index: usize,
    pub to_index: usize,
}

impl Command for MoveTask {
    fn execute(&self, board: &Board) -> Option<Board> {
        board.try_move_task(
            &self.from_column,
            &self.to_column,
            self.from_index,
            self.to_index,
        )
    }

    fn description(&self) -> String {
        format!(
            "Move task {}[{}] to {}[{}]",
            self.from_column, self.from_index, self.to_column, self.to_index
        )
    }
}
