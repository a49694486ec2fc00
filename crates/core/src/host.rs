use crate::pipeline::PipelineConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One flag on a registered command's surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFlag {
    pub flag: String,
    pub description: String,
}

impl CommandFlag {
    pub fn new(flag: &str, description: &str) -> Self {
        Self {
            flag: flag.to_string(),
            description: description.to_string(),
        }
    }
}

/// Metadata for a command a plugin registered on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub flags: Vec<CommandFlag>,
}

/// The host API handed to the plugin's configuration hook.
///
/// Covers everything the plugin needs from the bundler: path resolution
/// relative to the project root, capability queries, installed-dependency
/// version lookup, command registration, and access to the mutable pipeline
/// configuration.
pub trait BundlerApi {
    fn project_root(&self) -> &Path;

    fn resolve(&self, rel: &str) -> PathBuf {
        self.project_root().join(rel)
    }

    fn has_plugin(&self, name: &str) -> bool;

    /// Declared version of an installed dependency, read from the package's
    /// own metadata. `None` when the package is not installed.
    fn dependency_version(&self, name: &str) -> Option<String>;

    fn register_command(&mut self, command: RegisteredCommand);

    fn pipeline_mut(&mut self) -> &mut PipelineConfig;
}

/// Filesystem-backed host used by the CLI and by tests.
#[derive(Debug, Default)]
pub struct ProjectHost {
    project_root: PathBuf,
    plugins: Vec<String>,
    pipeline: PipelineConfig,
    commands: Vec<RegisteredCommand>,
}

impl ProjectHost {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            ..Default::default()
        }
    }

    /// Marks a sibling plugin as active (`babel`, `eslint`, ...).
    pub fn with_plugin(mut self, name: &str) -> Self {
        self.plugins.push(name.to_string());
        self
    }

    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    pub fn command(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.iter().find(|command| command.name == name)
    }
}

impl BundlerApi for ProjectHost {
    fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin == name)
    }

    fn dependency_version(&self, name: &str) -> Option<String> {
        let manifest = self
            .project_root
            .join("node_modules")
            .join(name)
            .join("package.json");
        let contents = std::fs::read_to_string(&manifest).ok()?;
        let metadata: serde_json::Value = serde_json::from_str(&contents).ok()?;
        let version = metadata.get("version")?.as_str()?.to_string();
        debug!("Resolved {}@{} from {}", name, version, manifest.display());
        Some(version)
    }

    fn register_command(&mut self, command: RegisteredCommand) {
        debug!("Registering command `{}`", command.name);
        self.commands.push(command);
    }

    fn pipeline_mut(&mut self) -> &mut PipelineConfig {
        &mut self.pipeline
    }
}
