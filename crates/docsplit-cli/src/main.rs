//! docsplit CLI: builds a static README and a Jekyll index page from one template.
//!
//! Running `docsplit` with no arguments is the same as `docsplit generate`, which
//! is what a pre-commit hook calls. `check` verifies without writing,
//! `placeholders` lists the substitution table, and `init` writes a starter config.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsplit",
    about = "Generate a static README and a Jekyll index page from one markdown template",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to docsplit.config.json (built-in defaults are used if it does not exist)
    #[arg(long, global = true, default_value = docsplit_core::config::CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand the template and write both outputs (default)
    Generate {
        /// Skip the git check for uncommitted edits to the outputs
        #[arg(long)]
        no_vcs: bool,
    },

    /// Fail if either output differs from what the template would generate
    Check,

    /// List the placeholder lines and what they expand to
    Placeholders {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with the built-in defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Generate { no_vcs: false }) {
        Commands::Generate { no_vcs } => {
            commands::generate::run(&cli.config, no_vcs)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
        Commands::Placeholders { json } => {
            commands::placeholders::run(&cli.config, json)?;
        }
        Commands::Init { force } => {
            commands::init::run(&cli.config, force)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_generate() {
        let cli = Cli::try_parse_from(["docsplit"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("docsplit.config.json"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docsplit",
            "generate",
            "--no-vcs",
            "-vv",
            "--config",
            "site/docsplit.config.json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Generate { no_vcs: true })));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("site/docsplit.config.json"));
    }
}
