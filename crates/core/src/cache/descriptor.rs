use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Dependency name to semantic version, gathered from the installed
/// packages' own metadata. Ordered so the cache key is stable.
pub type ToolchainVersions = BTreeMap<String, String>;

/// Identity payload for the compilation stage's cached output.
///
/// Two descriptors with equal content are cache-equivalent: the previously
/// compiled output may be reused. The resolved lint config participates in
/// the identity even though lint configuration does not change compiled
/// bytes — its presence decides how the compilation stage gets wrapped by
/// the type-check stage, so flipping it must not share a cache entry. That
/// over-invalidation is deliberate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDescriptor {
    /// Name of the stage whose output is being cached.
    pub consumer: String,
    pub versions: ToolchainVersions,
    /// Modern-build flag; modern and legacy passes never share entries.
    pub modern: bool,
    pub lint_config: Option<PathBuf>,
}

impl CacheDescriptor {
    pub fn new(
        consumer: &str,
        versions: ToolchainVersions,
        modern: bool,
        lint_config: Option<PathBuf>,
    ) -> Self {
        Self {
            consumer: consumer.to_string(),
            versions,
            modern,
            lint_config,
        }
    }

    /// Stable digest of the descriptor content.
    ///
    /// Absent lint config hashes as an explicit marker rather than an empty
    /// string, so "absent" and "empty" never collide.
    pub fn cache_key(&self) -> String {
        let mut payload = format!("{}|modern={}", self.consumer, self.modern);
        for (name, version) in &self.versions {
            payload.push_str(&format!("|{name}@{version}"));
        }
        match &self.lint_config {
            Some(path) => payload.push_str(&format!("|lint={}", path.display())),
            None => payload.push_str("|lint=<none>"),
        }
        format!("{:x}", md5::compute(payload.as_bytes()))
    }

    /// Options payload for the caching stage.
    pub fn to_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert(
            "cacheIdentifier".to_string(),
            Value::String(self.cache_key()),
        );
        options.insert("cacheDirectory".to_string(), json!("node_modules/.cache"));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions() -> ToolchainVersions {
        ToolchainVersions::from([
            ("ts-loader".to_string(), "5.3.3".to_string()),
            ("typescript".to_string(), "3.2.4".to_string()),
        ])
    }

    #[test]
    fn test_identical_inputs_yield_equal_descriptors() {
        let a = CacheDescriptor::new("ts-loader", versions(), false, None);
        let b = CacheDescriptor::new("ts-loader", versions(), false, None);
        assert_eq!(a, b);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_version_change_changes_key() {
        let a = CacheDescriptor::new("ts-loader", versions(), false, None);
        let mut bumped = versions();
        bumped.insert("typescript".to_string(), "3.3.0".to_string());
        let b = CacheDescriptor::new("ts-loader", bumped, false, None);
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_modern_flag_changes_key() {
        let a = CacheDescriptor::new("ts-loader", versions(), false, None);
        let b = CacheDescriptor::new("ts-loader", versions(), true, None);
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_lint_config_changes_key() {
        let a = CacheDescriptor::new("ts-loader", versions(), false, None);
        let b = CacheDescriptor::new(
            "ts-loader",
            versions(),
            false,
            Some(PathBuf::from("src/tslint.json")),
        );
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_absent_lint_config_distinct_from_empty_path() {
        let absent = CacheDescriptor::new("ts-loader", versions(), false, None);
        let empty = CacheDescriptor::new("ts-loader", versions(), false, Some(PathBuf::new()));
        assert_ne!(absent.cache_key(), empty.cache_key());
    }

    #[test]
    fn test_options_carry_identifier() {
        let descriptor = CacheDescriptor::new("ts-loader", versions(), true, None);
        let options = descriptor.to_options();
        assert_eq!(
            options.get("cacheIdentifier"),
            Some(&Value::String(descriptor.cache_key()))
        );
    }
}
