use super::StageDescriptor;
use crate::error::{Error, Result};
use regex::Regex;

/// A (file-pattern, stage-chain) pairing: which transform chain runs for
/// which files.
///
/// Stage order is semantically significant. Chains are declared
/// consumer-first: the caching stage sits closest to the consumer and the
/// compilation stage closest to the raw source, whatever execution order the
/// host bundler derives from that.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDescriptor {
    /// Slot name the host keys this rule under (`ts`, `tsx`).
    pub name: String,
    /// Regex source matched against module paths.
    pub test: String,
    pub stages: Vec<StageDescriptor>,
}

impl RuleDescriptor {
    pub fn new(name: &str, test: &str) -> Self {
        Self {
            name: name.to_string(),
            test: test.to_string(),
            stages: Vec::new(),
        }
    }

    pub fn compile_test(&self) -> Result<Regex> {
        Regex::new(&self.test).map_err(|source| Error::Pattern {
            pattern: self.test.clone(),
            source,
        })
    }

    pub fn matches(&self, path: &str) -> Result<bool> {
        Ok(self.compile_test()?.is_match(path))
    }

    pub fn push_stage(&mut self, stage: StageDescriptor) {
        self.stages.push(stage);
    }

    /// Additive merge: appends the incoming stages after whatever the host
    /// or other plugins already attached.
    pub fn merge_stages(&mut self, stages: Vec<StageDescriptor>) {
        self.stages.extend(stages);
    }

    pub fn stage(&self, name: &str) -> Option<&StageDescriptor> {
        self.stages.iter().find(|stage| stage.name == name)
    }
}
