//! Plugin options, environment snapshot, and config-file resolution

mod env;
mod options;
pub mod resolver;

pub use env::BuildEnv;
pub use options::PluginOptions;
pub use resolver::{ResolvedConfigFiles, resolve_first};
