use std::path::{Path, PathBuf};
use tracing::debug;

/// Lint-config candidates, component directory first.
pub const LINT_CONFIG_CANDIDATES: [&str; 2] = ["src/webapp/tslint.json", "src/tslint.json"];

/// Compiler-config candidates, component directory first.
pub const COMPILER_CONFIG_CANDIDATES: [&str; 2] = ["src/webapp/tsconfig.json", "src/tsconfig.json"];

/// Returns the first candidate, in list order, that exists under the project
/// root. Absence is a valid result, not a failure.
pub fn resolve_first(project_root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.exists())
}

/// Config files that apply to this project, computed once per configuration
/// pass and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfigFiles {
    pub lint: Option<PathBuf>,
    pub compile: Option<PathBuf>,
}

impl ResolvedConfigFiles {
    pub fn resolve(project_root: &Path) -> Self {
        let resolved = Self {
            lint: resolve_first(project_root, &LINT_CONFIG_CANDIDATES),
            compile: resolve_first(project_root, &COMPILER_CONFIG_CANDIDATES),
        };
        debug!(
            "Resolved config files: lint={:?}, compile={:?}",
            resolved.lint, resolved.compile
        );
        resolved
    }
}
