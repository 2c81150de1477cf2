//! Inline editing buffers.
//!
//! Drafts hold text the user is typing before it reaches the board. They
//! produce a command on submit and nothing on cancel.

use crate::commands::{AddTask, UpdateTask};
use crate::task::is_valid_title;
use crate::{ColumnId, Task, TaskId, TaskUpdate};

/// The "add task" form of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskDraft {
    column_id: ColumnId,
    pub title: String,
}

impl NewTaskDraft {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
            title: String::new(),
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Yields the add command and empties the form, unless the title is blank,
    /// in which case the form keeps its text.
    pub fn submit(&mut self) -> Option<AddTask> {
        if !is_valid_title(&self.title) {
            return None;
        }
        let title = std::mem::take(&mut self.title);
        Some(AddTask::titled(self.column_id.clone(), title))
    }

    pub fn cancel(&mut self) {
        self.title.clear();
    }
}

/// Title and description edits of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    column_id: ColumnId,
    task_id: TaskId,
    original_title: String,
    original_description: String,
    pub title: String,
    pub description: String,
}

impl EditDraft {
    pub fn begin(column_id: impl Into<ColumnId>, task: &Task) -> Self {
        Self {
            column_id: column_id.into(),
            task_id: task.id.clone(),
            original_title: task.title.clone(),
            original_description: task.description.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn is_dirty(&self) -> bool {
        self.title != self.original_title || self.description != self.original_description
    }

    /// Yields the update for title and description, or nothing while the title is blank.
    pub fn commit(&self) -> Option<UpdateTask> {
        if !is_valid_title(&self.title) {
            return None;
        }
        Some(UpdateTask {
            column_id: self.column_id.clone(),
            task_id: self.task_id.clone(),
            update: TaskUpdate::new()
                .title(self.title.clone())
                .description(self.description.clone()),
        })
    }

    /// Discard the edits, restoring the task's values.
    pub fn cancel(&mut self) {
        self.title = self.original_title.clone();
        self.description = self.original_description.clone();
    }
}
