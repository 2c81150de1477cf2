use crate::Board;

pub mod board_commands;
pub mod task_commands;

pub use board_commands::*;
pub use task_commands::*;

/// A board mutation expressed as a value.
///
/// Commands never modify the board they are given; they return the next
/// board, or `None` when the command is declined (blank title, unknown task,
/// out-of-range index).
pub trait Command: Send + Sync {
    /// Derive the next board from `board`.
    fn execute(&self, board: &Board) -> Option<Board>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
