use super::Command;
use crate::{Board, Template};

/// Replace the whole board with a template's seed board (reset, clear, template switch).
pub struct ReplaceBoard {
    pub template: Template,
}

impl Command for ReplaceBoard {
    fn execute(&self, _board: &Board) -> Option<Board> {
        Some(self.template.default_board())
    }

    fn description(&self) -> String {
        format!("Reset board to {} template", self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_ignores_current_board() {
        let current = Template::Kanban
            .default_board()
            .move_task("todo", "done", 0, 0);
        let command = ReplaceBoard {
            template: Template::Kanban,
        };
        assert_eq!(command.execute(&current), Some(Template::Kanban.default_board()));
        // replacing a board that already matches is still a new snapshot
        assert!(command.execute(&Template::Kanban.default_board()).is_some());
        assert_eq!(command.description(), "Reset board to kanban template");
    }
}
