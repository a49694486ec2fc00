use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Plugin options supplied by the host project.
///
/// Immutable for the duration of one configuration pass. Unknown keys are
/// ignored so the same options file can carry settings for other plugins.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOptions {
    /// Distribute compilation across worker processes (production builds only).
    pub parallel: bool,
    /// Multi-entry page map; when present the default app entry is left alone.
    pub pages: Option<HashMap<String, Value>>,
    /// Feed the lint config to the type-check stage. On unless suppressed.
    pub lint_on_save: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            pages: None,
            lint_on_save: true,
        }
    }
}

impl PluginOptions {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let options = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse options: {e}")))?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options: PluginOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.parallel);
        assert!(options.pages.is_none());
        assert!(options.lint_on_save);
    }

    #[test]
    fn test_explicit_values() {
        let options: PluginOptions = serde_json::from_value(json!({
            "parallel": true,
            "pages": { "index": { "entry": "src/webapp/pages/index.ts" } },
            "lintOnSave": false
        }))
        .unwrap();
        assert!(options.parallel);
        assert!(options.pages.is_some());
        assert!(!options.lint_on_save);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tschain.json");
        std::fs::write(&path, r#"{ "parallel": true }"#).unwrap();

        let options = PluginOptions::load_from_file(&path).unwrap();
        assert!(options.parallel);
        assert!(options.lint_on_save);
    }
}
