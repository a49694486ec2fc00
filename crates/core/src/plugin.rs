use crate::cache::ToolchainVersions;
use crate::chain::{TransformChainBuilder, TypeCheck};
use crate::config::{BuildEnv, PluginOptions, ResolvedConfigFiles};
use crate::error::Result;
use crate::host::{BundlerApi, CommandFlag, RegisteredCommand};
use tracing::debug;

/// Entry slot overwritten in single-entry mode.
pub const APP_ENTRY: &str = "app";

/// Canonical bootstrap module for single-entry projects.
pub const SINGLE_ENTRY_BOOTSTRAP: &str = "./src/webapp/main.ts";

/// Packages whose declared versions feed the compilation cache identity.
const COMPILE_TOOL: &str = "ts-loader";
const COMPILER: &str = "typescript";

/// Placeholder version for a package whose metadata could not be read; kept
/// distinct from any real semver so it still invalidates once the real
/// version becomes known.
const UNRESOLVED_VERSION: &str = "unresolved";

/// Plugin configuration hook. Reads the environment once, then delegates.
pub fn configure(api: &mut dyn BundlerApi, options: &PluginOptions) -> Result<()> {
    configure_with_env(api, options, BuildEnv::from_env())
}

/// Configuration pass against an explicit environment snapshot.
///
/// All effects are mutations on the host's pipeline configuration plus, when
/// no competing lint integration is active, one command registration.
pub fn configure_with_env(
    api: &mut dyn BundlerApi,
    options: &PluginOptions,
    env: BuildEnv,
) -> Result<()> {
    let resolved = ResolvedConfigFiles::resolve(api.project_root());
    let versions = toolchain_versions(api);
    let has_downlevel = api.has_plugin("babel");
    let has_lint_integration = api.has_plugin("eslint");
    let plugin_loader_dir = api.resolve("node_modules");

    let chain = TransformChainBuilder::new(&resolved, options, env, versions)
        .with_downlevel(has_downlevel)
        .with_type_check(TypeCheck::Disabled)
        .build();

    let pipeline = api.pipeline_mut();
    pipeline.prepend_loader_path(plugin_loader_dir);

    if options.pages.is_none() {
        debug!("Single-entry mode: overriding `{APP_ENTRY}` entry");
        pipeline.set_entry(APP_ENTRY, SINGLE_ENTRY_BOOTSTRAP);
    }

    pipeline.merge_extensions(&[".ts", ".tsx"]);
    pipeline.merge_rule(chain.ts_rule);
    pipeline.merge_rule(chain.tsx_rule);
    if let Some(checker) = chain.type_check {
        pipeline.checkers.push(checker);
    }

    if !has_lint_integration {
        api.register_command(lint_command());
    }

    Ok(())
}

fn toolchain_versions(api: &dyn BundlerApi) -> ToolchainVersions {
    let mut versions = ToolchainVersions::new();
    for package in [COMPILE_TOOL, COMPILER] {
        let version = api
            .dependency_version(package)
            .unwrap_or_else(|| UNRESOLVED_VERSION.to_string());
        versions.insert(package.to_string(), version);
    }
    versions
}

/// Flag surface of the registered lint command. The handler is a thin
/// dispatch to the external linter; see [`crate::lint`].
pub fn lint_command() -> RegisteredCommand {
    RegisteredCommand {
        name: "lint".to_string(),
        description: "lint source files with TSLint".to_string(),
        usage: "tschain lint [options] [...files]".to_string(),
        flags: vec![
            CommandFlag::new("--format [formatter]", "specify formatter (default: codeframe)"),
            CommandFlag::new("--no-fix", "do not fix errors"),
            CommandFlag::new("--formatters-dir [dir]", "formatter directory"),
            CommandFlag::new("--rules-dir [dir]", "rules directory"),
        ],
    }
}
