use serde_json::{Map, Value};

/// Stage identities used by the transform chains this plugin assembles.
pub mod names {
    pub const CACHE: &str = "cache-loader";
    pub const THREADS: &str = "thread-loader";
    pub const DOWNLEVEL: &str = "babel-loader";
    pub const COMPILE: &str = "ts-loader";
    pub const TYPE_CHECK: &str = "fork-ts-checker";
}

/// One unit in an ordered transform chain: a stage identity plus the options
/// handed to it. Options are opaque payloads for the downstream stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageDescriptor {
    pub name: String,
    pub options: Map<String, Value>,
}

impl StageDescriptor {
    /// Stage with no per-call options; the stage's own defaults apply.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: Map::new(),
        }
    }

    pub fn with_options(name: &str, options: Map<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            options,
        }
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}
