//! Implementation of the `tuxgen new` command.
//!
//! Responsibility: collect answers, hand them to the core resolver and
//! materializer, and report what was written. No derivation happens here.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument, warn};

use tuxgen_adapters::{DelimiterRenderer, LocalFilesystem, ProcessInstaller};
use tuxgen_core::{
    application::{ConfigResolver, DependencyInstaller, Materializer},
    domain::{MaterializationPlan, RawAnswers, ResolvedConfig},
};

use crate::{
    cli::NewArgs,
    commands::templates::{template_dir, template_store},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompts::{self, HostFacts},
};

const FIELD_WIDTH: usize = 12;

/// Execute the `tuxgen new` command.
///
/// 1. Probe the host project (base path, elements registry, manifest engine)
/// 2. Collect answers from flags, config defaults and, when interactive, prompts
/// 3. Resolve them into a [`ResolvedConfig`]
/// 4. Early-exit with the plan if `--dry-run`
/// 5. Render and write the files
/// 6. Install dependencies unless skipped
#[instrument(skip_all, fields(entity = args.entity_name.as_deref().unwrap_or("?")))]
pub fn execute(
    args: NewArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;

    // 1. Host facts
    let resolver = ConfigResolver::new(Box::new(LocalFilesystem::new()), &cwd);
    let facts = HostFacts {
        probed_base_path: resolver.detect_base_path(),
        registry_present: resolver.registry_present(),
        manifest_engine: resolver.detect_view_engine(),
    };
    debug!(?facts, "Host project probed");

    // 2. Answers
    let answers = collect_answers(&args, &config, &facts, &output)?;

    // 3. Resolution
    let resolved = resolver.resolve(answers);

    let dir = template_dir(args.templates.clone(), &config)?;
    let materializer = Materializer::new(
        template_store(dir),
        Box::new(DelimiterRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let plan = materializer.plan(&resolved);

    if !output.is_json() {
        show_configuration(&resolved, &output)?;
    }

    // 4. Dry run
    if args.dry_run {
        return show_plan(&resolved, &plan, &output);
    }

    // 5. Write
    if !output.is_json() {
        output.header(&format!(
            "Happy to generate {} for you.",
            resolved.entity_name()
        ))?;
    }
    let report = materializer.materialize(&resolved, &cwd)?;
    let written: Vec<PathBuf> = report
        .written
        .iter()
        .map(|p| display_path(p, &cwd))
        .collect();

    if !output.is_json() {
        for path in &written {
            output.success(&format!("create {}", path.display()))?;
        }
    }

    // 6. Install
    let installed = install_dependencies(&resolved, &cwd, &output)?;

    if output.is_json() {
        output.json(&json!({
            "config": resolved,
            "files": written,
            "dryRun": false,
            "installed": installed,
        }))?;
    }

    info!(files = written.len(), installed, "Entity generated");
    Ok(())
}

// ── Answers ───────────────────────────────────────────────────────────────────

fn collect_answers(
    args: &NewArgs,
    config: &AppConfig,
    facts: &HostFacts,
    output: &OutputManager,
) -> CliResult<RawAnswers> {
    let interactive =
        !args.yes && !output.is_quiet() && !output.is_json() && std::io::stdin().is_terminal();

    if !interactive {
        debug!("Non-interactive run; answering from flags and defaults");
        return Ok(prompts::from_flags(args, &config.defaults, facts));
    }

    ask(args, config, facts)
}

#[cfg(feature = "interactive")]
fn ask(args: &NewArgs, config: &AppConfig, facts: &HostFacts) -> CliResult<RawAnswers> {
    let asker = prompts::TerminalAsker::new();
    prompts::ask(args, &config.defaults, facts, &asker)
}

#[cfg(not(feature = "interactive"))]
fn ask(args: &NewArgs, config: &AppConfig, facts: &HostFacts) -> CliResult<RawAnswers> {
    if args.entity_name.is_none() {
        return Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    Ok(prompts::from_flags(args, &config.defaults, facts))
}

// ── Install ───────────────────────────────────────────────────────────────────

/// Returns whether the installer ran.
fn install_dependencies(
    resolved: &ResolvedConfig,
    cwd: &Path,
    output: &OutputManager,
) -> CliResult<bool> {
    if resolved.skip_install() {
        if !output.is_json() {
            output.info(
                "Skipping dependencies installation, you can run npm install and bower install at your leisure",
            )?;
        }
        return Ok(false);
    }

    let installer = ProcessInstaller::new();
    let spinner = output.spinner("Installing dependencies (npm install, bower install)...");
    let result = installer.install(cwd);
    spinner.finish_and_clear();

    if let Err(e) = &result {
        warn!(error = %e, "Dependency installation failed; generated files are kept");
    }
    result?;

    if !output.is_json() {
        output.success("Dependencies installed")?;
    }
    Ok(true)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(resolved: &ResolvedConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.field("Entity", resolved.entity_name(), FIELD_WIDTH)?;
    out.field("Type", resolved.entity_type().as_str(), FIELD_WIDTH)?;
    if let Some(behavior) = resolved.behavior_name() {
        out.field("Behavior", behavior, FIELD_WIDTH)?;
    }
    out.field("Version", resolved.version(), FIELD_WIDTH)?;
    out.field("View engine", resolved.view_engine().as_str(), FIELD_WIDTH)?;
    out.field(
        "Location",
        &resolved.base_path().display().to_string(),
        FIELD_WIDTH,
    )?;
    out.field(
        "Install",
        if resolved.skip_install() { "no" } else { "yes" },
        FIELD_WIDTH,
    )?;
    out.print("")?;
    Ok(())
}

fn show_plan(
    resolved: &ResolvedConfig,
    plan: &MaterializationPlan,
    out: &OutputManager,
) -> CliResult<()> {
    if out.is_json() {
        let files: Vec<_> = plan.files().iter().map(|f| &f.destination).collect();
        out.json(&json!({
            "config": resolved,
            "files": files,
            "dryRun": true,
        }))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create {} file(s) for '{}'",
        plan.len(),
        resolved.entity_name()
    ))?;
    for file in plan.files() {
        out.print(&format!(
            "  {}  (from {})",
            file.destination.display(),
            file.template
        ))?;
    }
    Ok(())
}

/// `path` relative to `root` when it lies under it.
fn display_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
