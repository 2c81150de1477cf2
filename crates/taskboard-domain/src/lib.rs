pub mod board;
pub mod column;
pub mod commands;
pub mod draft;
pub mod drag;
pub mod engine;
pub mod history;
pub mod task;
pub mod task_update;
pub mod template;

pub use board::Board;
pub use column::ColumnId;
pub use draft::{EditDraft, NewTaskDraft};
pub use drag::{DragSession, DropTarget, DropZone, DRAG_MIME_TYPE};
pub use engine::{BoardEngine, BoardPersistence, BoardView};
pub use history::HistoryManager;
pub use task::{is_valid_title, Priority, Task, TaskId};
pub use task_update::TaskUpdate;
pub use template::Template;
