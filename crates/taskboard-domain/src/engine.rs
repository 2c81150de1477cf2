//! The board engine: the single entry point renderers talk to.
//!
//! Every user intent goes through [`BoardEngine`], which derives the next
//! board, records it in the history, and hands it to the persistence hook.
//! The in-memory history is authoritative; persistence is best effort.

use crate::commands::{AddTask, Command, DeleteTask, MoveTask, ReplaceBoard, UpdateTask};
use crate::drag::{DragSession, DropTarget};
use crate::{Board, HistoryManager, Priority, TaskId, TaskUpdate, Template};
use serde::Serialize;
use taskboard_core::TaskboardResult;

/// Save/load hook for the current board.
#[cfg_attr(test, mockall::automock)]
pub trait BoardPersistence: Send + Sync {
    /// The stored board, or `None` when nothing has been stored yet.
    fn load(&self) -> TaskboardResult<Option<Board>>;

    fn save(&self, board: &Board) -> TaskboardResult<()>;
}

/// What a renderer needs to draw the board and its undo/redo controls.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView<'a> {
    pub template: Template,
    pub board: &'a Board,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_index: usize,
    pub history_len: usize,
}

pub struct BoardEngine {
    template: Template,
    history: HistoryManager,
    persistence: Option<Box<dyn BoardPersistence>>,
}

impl BoardEngine {
    /// In-memory engine seeded with the template's default board.
    pub fn new(template: Template) -> Self {
        Self {
            template,
            history: HistoryManager::new(template.default_board()),
            persistence: None,
        }
    }

    /// Engine seeded from `persistence`, falling back to the template's
    /// default board when nothing usable is stored.
    pub fn with_persistence(template: Template, persistence: Box<dyn BoardPersistence>) -> Self {
        let initial = Self::load_initial(template, persistence.as_ref());
        Self {
            template,
            history: HistoryManager::new(initial),
            persistence: Some(persistence),
        }
    }

    fn load_initial(template: Template, persistence: &dyn BoardPersistence) -> Board {
        match persistence.load() {
            Ok(Some(board)) if board.has_unique_task_ids() => {
                tracing::info!(
                    "Loaded stored board with {} tasks in {} columns",
                    board.task_count(),
                    board.column_ids().count()
                );
                board
            }
            Ok(Some(_)) => {
                tracing::warn!(
                    "Stored board repeats task ids; starting from the {} template",
                    template
                );
                template.default_board()
            }
            Ok(None) => {
                tracing::debug!("No stored board; starting from the {} template", template);
                template.default_board()
            }
            Err(e) if e.is_storage() => {
                tracing::warn!(
                    "Could not read stored board ({}); starting from the {} template",
                    e,
                    template
                );
                template.default_board()
            }
            Err(e) => {
                tracing::warn!(
                    "Discarding stored board ({}); starting from the {} template",
                    e,
                    template
                );
                template.default_board()
            }
        }
    }

    pub fn board(&self) -> &Board {
        self.history.current()
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            template: self.template,
            board: self.board(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            history_index: self.history.index(),
            history_len: self.history.len(),
        }
    }

    /// Run a command against the current board.
    ///
    /// Returns true when a snapshot was recorded. Every accepted command is
    /// recorded, even one whose result equals the current board; a declined
    /// command records nothing.
    pub fn execute(&mut self, command: &dyn Command) -> bool {
        let description = command.description();
        let Some(next) = command.execute(self.board()) else {
            tracing::debug!("Declined: {}", description);
            return false;
        };

        tracing::debug!("Executing: {}", description);
        self.history.record(next);
        self.persist();
        true
    }

    /// Adds a task and returns its id, or `None` if the title was blank.
    pub fn add_task(
        &mut self,
        column_id: &str,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Option<TaskId> {
        let command = AddTask::new(column_id, title, description, priority);
        self.execute(&command).then(|| command.task.id)
    }

    pub fn update_task(&mut self, column_id: &str, task_id: &str, update: TaskUpdate) -> bool {
        self.execute(&UpdateTask {
            column_id: column_id.to_string(),
            task_id: task_id.to_string(),
            update,
        })
    }

    pub fn delete_task(&mut self, column_id: &str, task_id: &str) -> bool {
        self.execute(&DeleteTask {
            column_id: column_id.to_string(),
            task_id: task_id.to_string(),
        })
    }

    pub fn move_task(
        &mut self,
        from_column: &str,
        to_column: &str,
        from_index: usize,
        to_index: usize,
    ) -> bool {
        self.execute(&MoveTask {
            from_column: from_column.to_string(),
            to_column: to_column.to_string(),
            from_index,
            to_index,
        })
    }

    /// Complete a drag that started at `session` and was dropped on `target`.
    pub fn drop_task(&mut self, session: DragSession, target: DropTarget) -> bool {
        self.execute(&session.drop_onto(target))
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        tracing::debug!("Undo to snapshot {}", self.history.index());
        self.persist();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        tracing::debug!("Redo to snapshot {}", self.history.index());
        self.persist();
        true
    }

    /// Replace the board with the active template's default board (undoable).
    pub fn reset(&mut self) -> bool {
        self.execute(&ReplaceBoard {
            template: self.template,
        })
    }

    /// Like [`reset`](Self::reset), but only after `confirm` agrees.
    pub fn clear<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            tracing::debug!("Clear cancelled");
            return false;
        }
        self.reset()
    }

    /// Switch the active template and show its default board (undoable).
    pub fn select_template(&mut self, template: Template) -> bool {
        if template == self.template {
            return false;
        }
        self.template = template;
        self.reset()
    }

    /// Save the displayed board. Failures are logged and swallowed.
    fn persist(&self) {
        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save(self.board()) {
                tracing::warn!("Failed to save board, continuing in memory: {}", e);
            }
        }
    }
}
