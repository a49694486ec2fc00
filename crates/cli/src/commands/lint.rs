use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tschain_core::{LintArgs, run_lint};

pub fn lint_command(
    format: Option<String>,
    no_fix: bool,
    formatters_dir: Option<PathBuf>,
    rules_dir: Option<PathBuf>,
    files: Vec<String>,
) -> Result<()> {
    let project_root = env::current_dir().context("Failed to get current directory")?;

    let args = LintArgs {
        format,
        fix: !no_fix,
        formatters_dir,
        rules_dir,
        files,
    };

    // Exit code and output shape belong to the external linter.
    let status = run_lint(&args, &project_root)?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
