use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{inspect_command, lint_command};

#[derive(Parser)]
#[command(name = "tschain")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    NODE_ENV=production    Enable production-mode chains\n    MODERN_BUILD=1         Fold the modern-build flag into the cache identity\n    RUST_LOG=debug         Enable debug logging"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a configuration pass and print the assembled transform chains
    #[command(visible_alias = "i")]
    Inspect {
        /// Project directory (defaults to the current directory)
        dir: Option<String>,

        /// Enable the parallel option for this pass
        #[arg(short, long)]
        parallel: bool,

        /// Treat the named sibling plugin as active (repeatable)
        #[arg(long = "plugin", value_name = "name")]
        plugins: Vec<String>,

        /// Show which rule would handle the given module path
        #[arg(long = "match", value_name = "path")]
        match_path: Option<String>,

        /// Show full stage options
        #[arg(short, long)]
        verbose: bool,
    },
    /// Lint source files with TSLint
    Lint {
        /// Specify formatter (default: codeframe)
        #[arg(long = "format", value_name = "formatter")]
        format: Option<String>,

        /// Do not fix errors
        #[arg(long = "no-fix")]
        no_fix: bool,

        /// Formatter directory
        #[arg(long = "formatters-dir", value_name = "dir")]
        formatters_dir: Option<PathBuf>,

        /// Rules directory
        #[arg(long = "rules-dir", value_name = "dir")]
        rules_dir: Option<PathBuf>,

        /// Files to lint
        files: Vec<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Inspect {
                dir,
                parallel,
                plugins,
                match_path,
                verbose,
            } => inspect_command(dir.as_deref(), parallel, &plugins, match_path.as_deref(), verbose),
            Commands::Lint {
                format,
                no_fix,
                formatters_dir,
                rules_dir,
                files,
            } => lint_command(format, no_fix, formatters_dir, rules_dir, files),
        }
    }
}
