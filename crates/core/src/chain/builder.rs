use super::stage::names;
use super::{RuleDescriptor, StageDescriptor};
use crate::cache::{CacheDescriptor, ToolchainVersions};
use crate::config::{BuildEnv, PluginOptions, ResolvedConfigFiles};
use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::{debug, info};

/// Suffix pattern appended by the compilation stage when resolving imports
/// of single-file component scripts.
pub const COMPONENT_SUFFIX_PATTERN: &str = r"\.vue$";

pub const TS_TEST_PATTERN: &str = r"\.ts$";
pub const TSX_TEST_PATTERN: &str = r"\.tsx$";

/// Whether the project-wide type-check stage is wired into the pipeline.
/// Disabled for now; flipping this re-enables the stage wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeCheck {
    Enabled,
    #[default]
    Disabled,
}

/// Both rule chains produced by one builder call, plus the optional
/// project-wide checker.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutput {
    pub ts_rule: RuleDescriptor,
    pub tsx_rule: RuleDescriptor,
    pub type_check: Option<StageDescriptor>,
}

/// Assembles the ordered transform chains for plain TypeScript and for
/// TypeScript embedded in single-file components.
///
/// Both chains are built in one pass so the mirror invariant holds
/// structurally: every stage appended to one rule is appended to the other,
/// and the only divergence is the compilation stage's suffix-mapping option.
pub struct TransformChainBuilder<'a> {
    resolved: &'a ResolvedConfigFiles,
    options: &'a PluginOptions,
    env: BuildEnv,
    versions: ToolchainVersions,
    has_downlevel: bool,
    type_check: TypeCheck,
}

impl<'a> TransformChainBuilder<'a> {
    pub fn new(
        resolved: &'a ResolvedConfigFiles,
        options: &'a PluginOptions,
        env: BuildEnv,
        versions: ToolchainVersions,
    ) -> Self {
        Self {
            resolved,
            options,
            env,
            versions,
            has_downlevel: false,
            type_check: TypeCheck::default(),
        }
    }

    /// Host capability: a transpile/minify plugin is active. Passed in as a
    /// plain flag so the builder stays a pure function of its inputs.
    pub fn with_downlevel(mut self, has_downlevel: bool) -> Self {
        self.has_downlevel = has_downlevel;
        self
    }

    pub fn with_type_check(mut self, type_check: TypeCheck) -> Self {
        self.type_check = type_check;
        self
    }

    pub fn use_threads(&self) -> bool {
        self.env.production && self.options.parallel
    }

    pub fn build(&self) -> ChainOutput {
        let use_threads = self.use_threads();
        debug!(
            "Building transform chains: use_threads={}, downlevel={}, modern={}",
            use_threads, self.has_downlevel, self.env.modern_build
        );

        // Shared prefix, identical for both rules.
        let mut stages = Vec::new();

        let descriptor = CacheDescriptor::new(
            names::COMPILE,
            self.versions.clone(),
            self.env.modern_build,
            self.resolved.lint.clone(),
        );
        stages.push(StageDescriptor::with_options(
            names::CACHE,
            descriptor.to_options(),
        ));

        if use_threads {
            stages.push(StageDescriptor::new(names::THREADS));
        }

        if self.has_downlevel {
            info!("Adding downlevel stage to the transform chains");
            let mut options = Map::new();
            options.insert("presets".to_string(), json!(["minify"]));
            options.insert(
                "plugins".to_string(),
                json!(["babel-plugin-syntax-dynamic-import"]),
            );
            stages.push(StageDescriptor::with_options(names::DOWNLEVEL, options));
        }

        // Compilation stage last: closest to the raw source.
        let compile_options = self.compile_options(use_threads);

        let mut tsx_options = compile_options.clone();
        tsx_options.remove("appendTsSuffixTo");
        tsx_options.insert(
            "appendTsxSuffixTo".to_string(),
            json!([COMPONENT_SUFFIX_PATTERN]),
        );

        let mut ts_rule = RuleDescriptor::new("ts", TS_TEST_PATTERN);
        let mut tsx_rule = RuleDescriptor::new("tsx", TSX_TEST_PATTERN);
        ts_rule.merge_stages(stages.clone());
        tsx_rule.merge_stages(stages);
        ts_rule.push_stage(StageDescriptor::with_options(
            names::COMPILE,
            compile_options,
        ));
        tsx_rule.push_stage(StageDescriptor::with_options(names::COMPILE, tsx_options));

        let type_check = match self.type_check {
            TypeCheck::Enabled => Some(self.type_check_stage(use_threads)),
            TypeCheck::Disabled => None,
        };

        ChainOutput {
            ts_rule,
            tsx_rule,
            type_check,
        }
    }

    fn compile_options(&self, use_threads: bool) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("transpileOnly".to_string(), Value::Bool(true));
        options.insert(
            "appendTsSuffixTo".to_string(),
            json!([COMPONENT_SUFFIX_PATTERN]),
        );
        options.insert(
            "configFile".to_string(),
            path_or_null(self.resolved.compile.as_deref()),
        );
        options.insert("happyPackMode".to_string(), Value::Bool(use_threads));
        options
    }

    /// Project-wide static analysis, independent of the per-file chains.
    fn type_check_stage(&self, use_threads: bool) -> StageDescriptor {
        let lint = if self.options.lint_on_save {
            path_or_null(self.resolved.lint.as_deref())
        } else {
            Value::Null
        };

        let mut options = Map::new();
        options.insert("vue".to_string(), Value::Bool(true));
        options.insert(
            "tsconfig".to_string(),
            path_or_null(self.resolved.compile.as_deref()),
        );
        options.insert("tslint".to_string(), lint);
        options.insert("formatter".to_string(), json!("codeframe"));
        options.insert(
            "checkSyntacticErrors".to_string(),
            Value::Bool(use_threads),
        );
        StageDescriptor::with_options(names::TYPE_CHECK, options)
    }
}

fn path_or_null(path: Option<&Path>) -> Value {
    match path {
        Some(path) => Value::String(path.display().to_string()),
        None => Value::Null,
    }
}
