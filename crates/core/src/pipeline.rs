use crate::chain::{RuleDescriptor, StageDescriptor};
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Mutable pipeline configuration owned by the host for the duration of one
/// configuration pass.
///
/// Plugins mutate it additively: rule slots keep whatever stages the host or
/// other plugins already attached, and extension registration merges rather
/// than replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineConfig {
    /// Entry-point name to module list.
    pub entries: BTreeMap<String, Vec<String>>,
    pub resolve_extensions: Vec<String>,
    /// Directories searched for stage implementations, highest priority first.
    pub loader_paths: Vec<PathBuf>,
    pub rules: Vec<RuleDescriptor>,
    /// Project-wide checkers, independent of the per-file rule chains.
    pub checkers: Vec<StageDescriptor>,
}

impl PipelineConfig {
    /// Clears the named entry and replaces it with a single module.
    pub fn set_entry(&mut self, name: &str, module: &str) {
        let entry = self.entries.entry(name.to_string()).or_default();
        entry.clear();
        entry.push(module.to_string());
    }

    /// Merges extensions into the resolvable set, preserving existing order
    /// and skipping duplicates.
    pub fn merge_extensions(&mut self, extensions: &[&str]) {
        for ext in extensions {
            if !self.resolve_extensions.iter().any(|e| e == ext) {
                self.resolve_extensions.push(ext.to_string());
            }
        }
    }

    pub fn prepend_loader_path(&mut self, path: PathBuf) {
        self.loader_paths.insert(0, path);
    }

    /// Writes a rule into its test-pattern-keyed slot. An existing slot keeps
    /// its stages and receives the incoming ones appended.
    pub fn merge_rule(&mut self, rule: RuleDescriptor) {
        match self.rules.iter_mut().find(|slot| slot.name == rule.name) {
            Some(slot) => slot.merge_stages(rule.stages),
            None => self.rules.push(rule),
        }
    }

    pub fn rule(&self, name: &str) -> Option<&RuleDescriptor> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// First rule whose test pattern matches the given module path.
    pub fn rule_for_path(&self, path: &str) -> Result<Option<&RuleDescriptor>> {
        for rule in &self.rules {
            if rule.matches(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }
}
