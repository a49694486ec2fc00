//! End-to-end configuration pass against a real project tree

use serde_json::{Value, json};
use tschain_core::chain::stage::names;
use tschain_core::{BuildEnv, PluginOptions, ProjectHost, configure_with_env};

/// Project with only `src/tsconfig.json`: no component-dir configs, no lint
/// configs, toolchain installed under node_modules.
fn project() -> (tempfile::TempDir, ProjectHost) {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("src/webapp")).unwrap();
    std::fs::write(root.join("src/tsconfig.json"), "{}").unwrap();

    for (name, version) in [("ts-loader", "5.3.3"), ("typescript", "3.2.4")] {
        let pkg = root.join("node_modules").join(name);
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(
            pkg.join("package.json"),
            json!({ "name": name, "version": version }).to_string(),
        )
        .unwrap();
    }

    let host = ProjectHost::new(root.to_path_buf());
    (dir, host)
}

#[test]
fn test_production_parallel_pass() {
    let (dir, mut host) = project();
    let options = PluginOptions {
        parallel: true,
        ..Default::default()
    };
    let env = BuildEnv {
        production: true,
        modern_build: false,
    };

    configure_with_env(&mut host, &options, env).unwrap();

    let pipeline = host.pipeline();
    for rule_name in ["ts", "tsx"] {
        let rule = pipeline.rule(rule_name).unwrap();
        let stage_names: Vec<&str> = rule.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            stage_names,
            [names::CACHE, names::THREADS, names::COMPILE],
            "unexpected chain for rule `{rule_name}`"
        );
    }

    let compile = pipeline.rule("ts").unwrap().stage(names::COMPILE).unwrap();
    let expected_config = dir.path().join("src/tsconfig.json");
    assert_eq!(
        compile.option("configFile"),
        Some(&Value::String(expected_config.display().to_string()))
    );
    assert_eq!(compile.option("happyPackMode"), Some(&Value::Bool(true)));
    assert_eq!(compile.option("transpileOnly"), Some(&Value::Bool(true)));

    // No lint config anywhere in the tree.
    let tsx_compile = pipeline.rule("tsx").unwrap().stage(names::COMPILE).unwrap();
    assert!(tsx_compile.option("appendTsSuffixTo").is_none());
    assert!(tsx_compile.option("appendTsxSuffixTo").is_some());
}

#[test]
fn test_development_pass_has_no_parallel_stage() {
    let (_dir, mut host) = project();
    let options = PluginOptions {
        parallel: true,
        ..Default::default()
    };

    configure_with_env(&mut host, &options, BuildEnv::default()).unwrap();

    let rule = host.pipeline().rule("ts").unwrap();
    let stage_names: Vec<&str> = rule.stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(stage_names, [names::CACHE, names::COMPILE]);
}

#[test]
fn test_cache_identity_shifts_when_lint_config_appears() {
    let cache_identifier = |host: &ProjectHost| {
        host.pipeline()
            .rule("ts")
            .unwrap()
            .stage(names::CACHE)
            .unwrap()
            .option("cacheIdentifier")
            .cloned()
            .unwrap()
    };

    let (dir, mut host) = project();
    configure_with_env(&mut host, &PluginOptions::default(), BuildEnv::default()).unwrap();
    let before = cache_identifier(&host);

    std::fs::write(dir.path().join("src/tslint.json"), "{}").unwrap();
    let mut host = ProjectHost::new(dir.path().to_path_buf());
    configure_with_env(&mut host, &PluginOptions::default(), BuildEnv::default()).unwrap();
    let after = cache_identifier(&host);

    assert_ne!(before, after);
}

#[test]
fn test_repeated_passes_are_deterministic() {
    let (dir, _) = project();

    let run = || {
        let mut host = ProjectHost::new(dir.path().to_path_buf());
        configure_with_env(&mut host, &PluginOptions::default(), BuildEnv::default()).unwrap();
        host.pipeline().clone()
    };

    assert_eq!(run(), run());
}
