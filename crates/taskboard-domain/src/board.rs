//! The board value and its pure mutation operations.
//!
//! Every operation borrows the current board and returns a new one; the
//! receiver is never modified. Operations that cannot apply (blank title,
//! unknown task, out-of-range index) return an unchanged copy instead of an
//! error.

use crate::column::ColumnId;
use crate::task::{Priority, Task};
use crate::task_update::TaskUpdate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use taskboard_core::Editable;

/// Mapping from column key to its ordered tasks. Column order is the order
/// the columns were created in and is preserved through serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: IndexMap<ColumnId, Vec<Task>>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len() && self.columns.iter().eq(other.columns.iter())
    }
}

impl Eq for Board {}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with the given columns, all empty.
    pub fn with_columns<I, S>(column_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnId>,
    {
        Self::from_columns(column_ids.into_iter().map(|id| (id.into(), Vec::new())))
    }

    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (ColumnId, Vec<Task>)>,
    {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.keys()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&ColumnId, &[Task])> {
        self.columns.iter().map(|(id, tasks)| (id, tasks.as_slice()))
    }

    pub fn contains_column(&self, column_id: &str) -> bool {
        self.columns.contains_key(column_id)
    }

    /// Tasks of a column in display order; empty for an unknown column.
    pub fn tasks(&self, column_id: &str) -> &[Task] {
        self.columns.get(column_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn column_len(&self, column_id: &str) -> usize {
        self.tasks(column_id).len()
    }

    pub fn task_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    /// Locates a task anywhere on the board.
    pub fn find_task(&self, task_id: &str) -> Option<(&ColumnId, usize, &Task)> {
        self.columns.iter().find_map(|(column_id, tasks)| {
            tasks
                .iter()
                .position(|task| task.id == task_id)
                .map(|index| (column_id, index, &tasks[index]))
        })
    }

    /// Every task id appears exactly once across the whole board.
    pub fn has_unique_task_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.columns
            .values()
            .flatten()
            .all(|task| seen.insert(task.id.as_str()))
    }

    /// Creates a task with a fresh id at the end of `column_id`.
    pub fn add_task(
        &self,
        column_id: &str,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Board {
        let task = Task::new(title.to_string(), description.to_string(), priority);
        self.push_task(column_id, task)
    }

    pub fn push_task(&self, column_id: &str, task: Task) -> Board {
        self.try_push_task(column_id, task)
            .unwrap_or_else(|| self.clone())
    }

    /// Merges `update` into the task with `task_id`, searching `column_id` only.
    pub fn update_task(&self, column_id: &str, task_id: &str, update: TaskUpdate) -> Board {
        self.try_update_task(column_id, task_id, update)
            .unwrap_or_else(|| self.clone())
    }

    pub fn delete_task(&self, column_id: &str, task_id: &str) -> Board {
        self.try_delete_task(column_id, task_id)
            .unwrap_or_else(|| self.clone())
    }

    /// Moves the task at `from_index` in `from_column` to `to_index` in `to_column`.
    ///
    /// The task is removed before it is inserted, so for a move inside one
    /// column `to_index` counts positions in the column without the moved
    /// task. `to_index` past the end appends. An out-of-range `from_index` or
    /// an unknown `from_column` leaves the board unchanged. An unknown
    /// `to_column` is created.
    pub fn move_task(
        &self,
        from_column: &str,
        to_column: &str,
        from_index: usize,
        to_index: usize,
    ) -> Board {
        self.try_move_task(from_column, to_column, from_index, to_index)
            .unwrap_or_else(|| self.clone())
    }

    // The `try_` forms return `None` when the operation is declined.

    /// Appends an already-built task, creating the column if it is unknown.
    /// Declined when the title is blank or the id is already on the board.
    pub fn try_push_task(&self, column_id: &str, task: Task) -> Option<Board> {
        if !task.has_valid_title() || self.find_task(&task.id).is_some() {
            return None;
        }
        let mut next = self.clone();
        next.columns
            .entry(column_id.to_string())
            .or_default()
            .push(task);
        Some(next)
    }

    /// Declined when the update sets a blank title or the task is not in `column_id`.
    pub fn try_update_task(
        &self,
        column_id: &str,
        task_id: &str,
        update: TaskUpdate,
    ) -> Option<Board> {
        if !update.is_valid() {
            return None;
        }
        let mut next = self.clone();
        let task = next
            .columns
            .get_mut(column_id)?
            .iter_mut()
            .find(|task| task.id == task_id)?;
        update.apply_to(task);
        Some(next)
    }

    pub fn try_delete_task(&self, column_id: &str, task_id: &str) -> Option<Board> {
        let mut next = self.clone();
        let tasks = next.columns.get_mut(column_id)?;
        let index = tasks.iter().position(|task| task.id == task_id)?;
        tasks.remove(index);
        Some(next)
    }

    pub fn try_move_task(
        &self,
        from_column: &str,
        to_column: &str,
        from_index: usize,
        to_index: usize,
    ) -> Option<Board> {
        let mut next = self.clone();
        let task = match next.columns.get_mut(from_column) {
            Some(tasks) if from_index < tasks.len() => tasks.remove(from_index),
            _ => return None,
        };
        let target = next.columns.entry(to_column.to_string()).or_default();
        let slot = to_index.min(target.len());
        target.insert(slot, task);
        Some(next)
    }
}
