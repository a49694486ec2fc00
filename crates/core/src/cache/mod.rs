//! Cache identity for the compilation stage

mod descriptor;

pub use descriptor::{CacheDescriptor, ToolchainVersions};
