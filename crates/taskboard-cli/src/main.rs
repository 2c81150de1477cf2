mod cli;
mod context;
mod output;
mod shell;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "taskboard", &mut std::io::stdout());
        }
        Some(Commands::Intent(intent)) => {
            let mut ctx = CliContext::load(cli.data_dir, cli.template)?;
            match ctx.run(intent) {
                Ok(task_id) => output::output_success(ctx.report(task_id)),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
        Some(Commands::Shell) | None => {
            let mut ctx = CliContext::load(cli.data_dir, cli.template)?;
            tracing::info!("Starting shell on {}", ctx.data_dir().display());
            let stdin = std::io::stdin();
            shell::run(&mut ctx, stdin.lock())?;
        }
    }

    Ok(())
}
