/// Snapshot of the environment indicators consumed by the plugin.
///
/// Taken once at the start of a configuration pass so the builders stay pure
/// functions of their inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildEnv {
    /// `NODE_ENV=production`; gates the parallel-execution stage.
    pub production: bool,
    /// `MODERN_BUILD` set to a non-empty value; folded into the cache identity.
    pub modern_build: bool,
}

impl BuildEnv {
    pub fn from_env() -> Self {
        Self {
            production: std::env::var("NODE_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
            modern_build: std::env::var("MODERN_BUILD")
                .map(|v| !v.is_empty())
                .unwrap_or(false),
        }
    }
}
