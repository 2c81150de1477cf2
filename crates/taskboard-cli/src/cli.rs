use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::Template;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A column task board with undo and redo", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Directory holding the stored board (or set TASKBOARD_DATA_DIR)
    #[arg(long, value_name = "DIR", env = "TASKBOARD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Template used when nothing is stored (kanban, priority, timeline)
    #[arg(long, env = "TASKBOARD_TEMPLATE", global = true)]
    pub template: Option<Template>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Intent(Intent),
    /// Read one command per line from stdin, keeping undo history for the session
    Shell,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Board intents shared by one-shot commands and the shell.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Intent {
    /// Print the board
    Show,
    /// Add a task to a column
    Add(AddArgs),
    /// Edit a task in place
    Edit(EditArgs),
    /// Delete a task
    Delete {
        column: String,
        id: String,
    },
    /// Move the task at FROM_INDEX of FROM to TO_INDEX of TO
    Move {
        from: String,
        to: String,
        from_index: usize,
        to_index: usize,
    },
    /// Replace the board with the template's default board
    Reset,
    /// Like reset, but requires confirmation
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Switch to another template and show its default board
    Template {
        name: Template,
    },
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    pub column: String,
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args, Debug, PartialEq)]
pub struct EditArgs {
    pub column: String,
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    /// Replace the tags; repeat for several
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Remove all tags
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(name = "shell", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    #[command(flatten)]
    Intent(Intent),
    /// Step back to the previous board
    Undo,
    /// Step forward again after undo
    Redo,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_parse_move() {
        let cli = Cli::try_parse_from(["taskboard", "move", "todo", "done", "1", "0"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Intent(Intent::Move { from_index: 1, to_index: 0, .. }))
        ));
    }

    #[test]
    fn test_parse_template_option() {
        let cli = Cli::try_parse_from(["taskboard", "--template", "timeline", "show"]).unwrap();
        assert_eq!(cli.template, Some(Template::Timeline));
        assert!(Cli::try_parse_from(["taskboard", "--template", "scrum"]).is_err());
    }

    #[test]
    fn test_shell_line() {
        let line = ShellLine::try_parse_from(["undo"]).unwrap();
        assert_eq!(line.command, ShellCommand::Undo);

        let line = ShellLine::try_parse_from(["exit"]).unwrap();
        assert_eq!(line.command, ShellCommand::Quit);

        let line = ShellLine::try_parse_from(["edit", "todo", "1", "--tag", "a", "--tag", "b"]).unwrap();
        match line.command {
            ShellCommand::Intent(Intent::Edit(args)) => assert_eq!(args.tags, ["a", "b"]),
            other => panic!("unexpected {:?}", other),
        }
    }
}
