//! Undo/redo history management.
//!
//! Keeps every board the user has seen as a whole snapshot in one linear
//! sequence, plus a cursor pointing at the displayed board. This is pure
//! state management with no persistence or rendering concerns.

use crate::Board;

/// Linear snapshot history with a cursor.
///
/// Invariants: the sequence is never empty, the cursor is always a valid
/// index, and `entries[index]` is the displayed board.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    /// Snapshots in the order they were recorded.
    entries: Vec<Board>,

    /// Position of the displayed board in `entries`.
    index: usize,
}

impl HistoryManager {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: Board) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The displayed board.
    pub fn current(&self) -> &Board {
        &self.entries[self.index]
    }

    /// Derive a new board from the current one and record it.
    pub fn apply<F>(&mut self, updater: F) -> &Board
    where
        F: FnOnce(&Board) -> Board,
    {
        let next = updater(self.current());
        self.record(next)
    }

    /// Record `board` as the newest snapshot.
    ///
    /// Snapshots after the cursor are dropped first (a new action after an
    /// undo discards the redo branch).
    pub fn record(&mut self, board: Board) -> &Board {
        self.entries.truncate(self.index + 1);
        self.entries.push(board);
        self.index = self.entries.len() - 1;
        self.current()
    }

    /// Step back one snapshot. Returns false when already at the start.
    pub fn undo(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one snapshot. Returns false when already at the end.
    pub fn redo(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.index < self.entries.len() - 1
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Board] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Priority, Template};

    fn kanban() -> Board {
        Template::Kanban.default_board()
    }

    #[test]
    fn test_starts_with_single_entry() {
        let history = HistoryManager::new(kanban());
        assert_eq!(history.index(), 0);
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), &kanban());
    }

    #[test]
    fn test_add_undo_redo() {
        let mut history = HistoryManager::new(kanban());
        let after_add = history
            .apply(|b| b.add_task("todo", "New", "", Priority::Medium))
            .clone();

        assert!(history.undo());
        assert_eq!(history.current(), &kanban());
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.current(), &after_add);
        assert_eq!(history.index(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_undo_and_redo_at_bounds_are_noops() {
        let mut history = HistoryManager::new(kanban());
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history.index(), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_new_action_discards_redo_branch() {
        let mut history = HistoryManager::new(kanban());
        history.apply(|b| b.move_task("todo", "done", 0, 0));
        history.apply(|b| b.move_task("todo", "done", 0, 0));
        history.apply(|b| b.move_task("review", "done", 0, 0));
        assert_eq!(history.len(), 4);

        history.undo();
        history.undo();
        assert_eq!(history.index(), 1);

        history.apply(|b| b.delete_task("done", "6"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_cursor_moves_never_touch_entries() {
        let mut history = HistoryManager::new(kanban());
        history.apply(|b| b.delete_task("todo", "1"));
        let before = history.entries().to_vec();

        history.undo();
        history.redo();
        history.undo();
        assert_eq!(history.entries(), before.as_slice());
    }
}
