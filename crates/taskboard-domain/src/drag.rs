//! Drag-and-drop session protocol.
//!
//! A drag carries only where it started (`DragSession`), serialized into the
//! transfer payload. The column that receives the drop supplies where it
//! ends (`DropTarget`). Nothing about an in-flight drag is kept in shared
//! state, so an abandoned drag leaves nothing behind.

use crate::commands::MoveTask;
use crate::{Board, ColumnId};
use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};

/// Transfer format the payload is attached under.
pub const DRAG_MIME_TYPE: &str = "application/json";

/// Source location of a dragged task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    pub from_column: ColumnId,
    pub from_index: usize,
}

impl DragSession {
    /// Called on drag start for the task rendered at `task_index` in `column_id`.
    pub fn start(column_id: impl Into<ColumnId>, task_index: usize) -> Self {
        Self {
            from_column: column_id.into(),
            from_index: task_index,
        }
    }

    pub fn to_payload(&self) -> TaskboardResult<String> {
        serde_json::to_string(self).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    pub fn from_payload(payload: &str) -> TaskboardResult<Self> {
        serde_json::from_str(payload).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    /// The move that dropping this session onto `target` requests.
    pub fn drop_onto(self, target: DropTarget) -> MoveTask {
        MoveTask {
            from_column: self.from_column,
            to_column: target.column_id,
            from_index: self.from_index,
            to_index: target.index,
        }
    }
}

/// Where a drop lands: the receiving column and the hovered slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub column_id: ColumnId,
    pub index: usize,
}

impl DropTarget {
    /// Drop on the sibling currently rendered at `index`.
    pub fn slot(column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }

    /// Drop on the column body past its last task. For an empty or not yet
    /// existing column this is index 0.
    pub fn end_of(column_id: impl Into<ColumnId>, board: &Board) -> Self {
        let column_id = column_id.into();
        let index = board.column_len(&column_id);
        Self { column_id, index }
    }
}

/// Drop handling for one rendered column, including its hover highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    column_id: ColumnId,
    hovered: Option<usize>,
}

impl DropZone {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
            hovered: None,
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Slot currently highlighted as the drop position.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn drag_over(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn drag_leave(&mut self) {
        self.hovered = None;
    }

    /// Handle a drop at `index`. The highlight is cleared whether or not the
    /// payload decodes; an undecodable payload yields no move.
    pub fn drop(&mut self, payload: &str, index: usize) -> Option<MoveTask> {
        self.hovered = None;
        match DragSession::from_payload(payload) {
            Ok(session) => Some(session.drop_onto(DropTarget::slot(self.column_id.clone(), index))),
            Err(e) => {
                tracing::debug!("Ignoring drop on {}: {}", self.column_id, e);
                None
            }
        }
    }
}
