use crate::config::resolver::{LINT_CONFIG_CANDIDATES, resolve_first};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Formatter used when `--format` is not given.
pub const DEFAULT_FORMATTER: &str = "codeframe";

/// Default glob linted when no files are named.
const DEFAULT_FILES: &str = "src/**/*.ts";

/// Parsed surface of the registered `lint` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintArgs {
    pub format: Option<String>,
    /// Fixing is on unless suppressed with `--no-fix`.
    pub fix: bool,
    pub formatters_dir: Option<PathBuf>,
    pub rules_dir: Option<PathBuf>,
    pub files: Vec<String>,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            format: None,
            fix: true,
            formatters_dir: None,
            rules_dir: None,
            files: Vec::new(),
        }
    }
}

/// Argument vector for the external linter. Split out from the spawn so the
/// mapping is testable without running a process.
pub fn lint_arguments(args: &LintArgs, project_root: &Path) -> Vec<OsString> {
    let mut argv: Vec<OsString> = Vec::new();
    argv.push("--format".into());
    argv.push(args.format.as_deref().unwrap_or(DEFAULT_FORMATTER).into());
    if args.fix {
        argv.push("--fix".into());
    }
    if let Some(dir) = &args.formatters_dir {
        argv.push("--formatters-dir".into());
        argv.push(dir.into());
    }
    if let Some(dir) = &args.rules_dir {
        argv.push("--rules-dir".into());
        argv.push(dir.into());
    }
    if let Some(config) = resolve_first(project_root, &LINT_CONFIG_CANDIDATES) {
        argv.push("--config".into());
        argv.push(config.into());
    }
    if args.files.is_empty() {
        argv.push(DEFAULT_FILES.into());
    } else {
        argv.extend(args.files.iter().map(OsString::from));
    }
    argv
}

/// Thin dispatch to the external linter. Exit code and output shape are the
/// linter's own; nothing is caught or reshaped here.
pub fn run_lint(args: &LintArgs, project_root: &Path) -> Result<ExitStatus> {
    let argv = lint_arguments(args, project_root);
    debug!("Invoking tslint with {:?}", argv);
    Command::new("tslint")
        .current_dir(project_root)
        .args(&argv)
        .status()
        .map_err(|e| Error::Lint(format!("Failed to invoke tslint: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn to_strings(argv: Vec<OsString>) -> Vec<String> {
        argv.into_iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_arguments() {
        let dir = TempDir::new().unwrap();
        let argv = to_strings(lint_arguments(&LintArgs::default(), dir.path()));
        assert_eq!(
            argv,
            ["--format", DEFAULT_FORMATTER, "--fix", DEFAULT_FILES]
        );
    }

    #[test]
    fn test_no_fix_and_explicit_files() {
        let dir = TempDir::new().unwrap();
        let args = LintArgs {
            fix: false,
            format: Some("json".to_string()),
            files: vec!["src/webapp/main.ts".to_string()],
            ..Default::default()
        };
        let argv = to_strings(lint_arguments(&args, dir.path()));
        assert_eq!(argv, ["--format", "json", "src/webapp/main.ts"]);
    }

    #[test]
    fn test_resolved_lint_config_is_passed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/tslint.json"), "{}").unwrap();

        let argv = to_strings(lint_arguments(&LintArgs::default(), dir.path()));
        let config_pos = argv.iter().position(|a| a == "--config").unwrap();
        assert!(argv[config_pos + 1].ends_with("src/tslint.json"));
    }

    #[test]
    fn test_directory_overrides() {
        let dir = TempDir::new().unwrap();
        let args = LintArgs {
            formatters_dir: Some(PathBuf::from("fmt")),
            rules_dir: Some(PathBuf::from("rules")),
            ..Default::default()
        };
        let argv = to_strings(lint_arguments(&args, dir.path()));
        assert!(argv.windows(2).any(|w| w == ["--formatters-dir", "fmt"]));
        assert!(argv.windows(2).any(|w| w == ["--rules-dir", "rules"]));
    }
}
