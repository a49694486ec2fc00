use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tschain_core::{
    BuildEnv, PluginOptions, ProjectHost, ResolvedConfigFiles, configure_with_env,
};

/// Options file read from the project root, when present.
const OPTIONS_FILE: &str = "tschain.json";

pub fn inspect_command(
    dir: Option<&str>,
    parallel: bool,
    plugins: &[String],
    match_path: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let project_root = match dir {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let options_path = project_root.join(OPTIONS_FILE);
    let mut options = if options_path.exists() {
        debug!("Loading options from {}", options_path.display());
        PluginOptions::load_from_file(&options_path)?
    } else {
        PluginOptions::default()
    };
    if parallel {
        options.parallel = true;
    }

    let mut host = ProjectHost::new(project_root.clone());
    for plugin in plugins {
        host = host.with_plugin(plugin);
    }

    let build_env = BuildEnv::from_env();
    configure_with_env(&mut host, &options, build_env)?;

    println!("🔍 Inspecting: {}", project_root.display());
    println!("{}", "=".repeat(80));
    println!(
        "🌐 Environment: production={}, modern_build={}",
        build_env.production, build_env.modern_build
    );
    println!(
        "⚙️  Options: parallel={}, pages={}, lint_on_save={}",
        options.parallel,
        if options.pages.is_some() { "set" } else { "unset" },
        options.lint_on_save
    );

    let resolved = ResolvedConfigFiles::resolve(&project_root);
    println!("\n📁 Resolved config files:");
    print_resolved("compiler config", &resolved.compile);
    print_resolved("lint config", &resolved.lint);

    let pipeline = host.pipeline();

    if !pipeline.entries.is_empty() {
        println!("\n🚪 Entries:");
        for (name, modules) in &pipeline.entries {
            println!("   • {}: {:?}", name, modules);
        }
    }
    println!("\n🧩 Extensions: {:?}", pipeline.resolve_extensions);

    for rule in &pipeline.rules {
        println!("\n📐 Rule `{}` (test: {})", rule.name, rule.test);
        println!("   🔗 Chain (consumer → source):");
        for (i, stage) in rule.stages.iter().enumerate() {
            println!("      {}. {}", i + 1, stage.name);
            if verbose && !stage.options.is_empty() {
                let pretty = serde_json::to_string_pretty(&stage.options)?;
                for line in pretty.lines() {
                    println!("         {line}");
                }
            }
        }
    }

    if !pipeline.checkers.is_empty() {
        println!("\n🩺 Project-wide checkers:");
        for checker in &pipeline.checkers {
            println!("   • {}", checker.name);
        }
    }

    if let Some(path) = match_path {
        match pipeline.rule_for_path(path)? {
            Some(rule) => println!("\n🎯 `{}` is handled by rule `{}`", path, rule.name),
            None => println!("\n❌ No rule matches `{path}`"),
        }
    }

    if !host.commands().is_empty() {
        println!("\n🛠  Registered commands:");
        for command in host.commands() {
            println!("   • {} — {}", command.name, command.description);
            println!("     usage: {}", command.usage);
            for flag in &command.flags {
                println!("     {:<26} {}", flag.flag, flag.description);
            }
        }
    }

    println!("\n{}", "=".repeat(80));
    Ok(())
}

fn print_resolved(label: &str, path: &Option<PathBuf>) {
    match path {
        Some(path) => println!("   • {}: {}", label, path.display()),
        None => println!("   • {}: none", label),
    }
}
