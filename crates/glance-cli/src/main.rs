//! claude-glance - installer for the session summary hooks and statusline
//!
//! Provides `claude-glance install`, `uninstall`, `status` and `update`.

mod assets;
mod commands;
mod prompt;
mod ui;

use clap::{CommandFactory, Parser, Subcommand};
use console::style;
use glance_core::ConfigError;
use tracing_subscriber::EnvFilter;

use commands::ConfigDirArgs;
use prompt::PromptError;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "CLAUDE_GLANCE_LOG";

#[derive(Parser)]
#[command(name = "claude-glance")]
#[command(about = "claude-glance - At-a-glance session summary for Claude Code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log every file touched (overridden by CLAUDE_GLANCE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive installer (walks you through each option)
    Install(ConfigDirArgs),
    /// Remove hooks, scripts, and settings
    Uninstall(ConfigDirArgs),
    /// Check current installation status
    Status(ConfigDirArgs),
    /// Update session summary (called by Claude automatically)
    Update {
        /// One-line summary of the session
        summary: Option<String>,
        /// Session the summary belongs to
        session_id: Option<String>,
    },
    /// Print JSON fields read from stdin, one per line
    #[command(hide = true)]
    ParseJson {
        /// Dotted field paths
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print an error the way the user should see it and pick the exit code
fn report(err: &anyhow::Error) -> i32 {
    if let Some(PromptError::Cancelled) = err.downcast_ref::<PromptError>() {
        println!("\n  {} Cancelled.\n", style("✗").yellow());
        return 0;
    }

    if let Some(e @ ConfigError::PrerequisiteMissing { .. }) = err.downcast_ref::<ConfigError>() {
        eprintln!("\n  {} {e}", style("✗").red());
        for line in e.hint() {
            eprintln!("    {line}");
        }
        return 1;
    }

    eprintln!("Error: {err}");
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        for line in e.hint() {
            eprintln!("  {line}");
        }
    }
    1
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => {
            let mut cmd = Cli::command();
            if let Err(e) = cmd.print_help() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            println!();
            Ok(0)
        }
        Some(Commands::Install(args)) => commands::install::execute(&args).map(|()| 0),
        Some(Commands::Uninstall(args)) => commands::uninstall::execute(&args).map(|()| 0),
        Some(Commands::Status(args)) => commands::status::execute(&args).map(|()| 0),
        Some(Commands::Update {
            summary,
            session_id,
        }) => commands::update::execute(summary.as_deref(), session_id.as_deref()),
        Some(Commands::ParseJson { fields }) => commands::parse_json::execute(&fields).map(|()| 0),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => report(&e),
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cancel_exits_zero() {
        let err = anyhow::Error::from(PromptError::Cancelled);
        assert_eq!(report(&err), 0);
    }

    #[test]
    fn test_prerequisite_exits_one() {
        let err = anyhow::Error::from(ConfigError::PrerequisiteMissing {
            config_dir: "/nope/.claude".into(),
            from_env: false,
        });
        assert_eq!(report(&err), 1);
    }
}
