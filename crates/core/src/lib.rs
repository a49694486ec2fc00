//! tschain - wires TypeScript compilation into a bundler's transform pipeline
//!
//! This crate provides functionality to:
//! - Resolve which compiler and lint config files apply via ordered fallback search
//! - Derive a stable cache identity for the compilation stage
//! - Assemble the ordered transform chains for `.ts` files and for TypeScript
//!   embedded in single-file components
//! - Mutate the host's pipeline configuration and register the lint command
pub mod cache;
pub mod chain;
pub mod config;
pub mod error;
pub mod host;
pub mod lint;
pub mod pipeline;
pub mod plugin;

// Re-export commonly used types
pub use cache::{CacheDescriptor, ToolchainVersions};
pub use chain::{ChainOutput, RuleDescriptor, StageDescriptor, TransformChainBuilder, TypeCheck};
pub use config::{BuildEnv, PluginOptions, ResolvedConfigFiles};
pub use error::{Error, Result};
pub use host::{BundlerApi, ProjectHost, RegisteredCommand};
pub use lint::{LintArgs, run_lint};
pub use pipeline::PipelineConfig;
pub use plugin::{configure, configure_with_env};
