//! End-to-end tests for the `tuxgen` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `tuxgen` command running in `project`, isolated from the user's
/// config directory and environment.
fn tuxgen(project: &Path, home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tuxgen");
    cmd.current_dir(project)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("TUXGEN_DEFAULTS__VIEW_ENGINE")
        .env_remove("TUXGEN_DEFAULTS__SKIP_INSTALL")
        .env_remove("TUXGEN_TEMPLATES__LOCAL_PATH");
    cmd
}

struct Sandbox {
    project: TempDir,
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        tuxgen(self.project.path(), self.home.path())
    }

    fn path(&self, rel: &str) -> std::path::PathBuf {
        self.project.path().join(rel)
    }

    fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).unwrap();
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag_prints_version() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_exits_with_two() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "--frobnicate"])
        .assert()
        .code(2);
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn element_with_behavior_writes_three_files() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "tux-panel", "--yes", "--base-path", "app/elements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Happy to generate tux-panel for you."));

    let dir = "app/elements/tux-panel";
    let view = sandbox.read(&format!("{dir}/tux-panel.html"));
    assert!(view.contains("tux-panel"));
    assert!(view.contains("/bower_components"));
    assert!(!view.contains("<?"));

    assert!(sandbox.path(&format!("{dir}/tux-panel-style.html")).is_file());
    let behavior = sandbox.read(&format!("{dir}/tux-panel-behavior.html"));
    assert!(behavior.contains("PanelBehavior"));
}

#[test]
fn element_without_behavior_writes_two_files() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "tux-card", "--yes", "--no-behavior", "-b", "."])
        .assert()
        .success();

    assert!(sandbox.path("tux-card/tux-card.html").is_file());
    assert!(sandbox.path("tux-card/tux-card-style.html").is_file());
    assert!(!sandbox.path("tux-card/tux-card-behavior.html").exists());
}

#[test]
fn behavior_entity_writes_view_and_style() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "tux-drag", "--type", "behavior", "--yes", "-b", "lib"])
        .assert()
        .success();

    let view = sandbox.read("lib/tux-drag/tux-drag.html");
    assert!(view.contains("drag-behavior"));
    assert!(sandbox.path("lib/tux-drag/tux-drag-style.html").is_file());
    assert!(!sandbox.path("lib/tux-drag/tux-drag-behavior.html").exists());
}

#[test]
fn base_path_is_probed_when_not_given() {
    let sandbox = Sandbox::new();
    sandbox.mkdir("app/modules");
    sandbox.mkdir("app/elements");

    sandbox
        .cmd()
        .args(["new", "x-foo", "--yes"])
        .assert()
        .success();

    // app/modules comes before app/elements in probe order
    assert!(sandbox.path("app/modules/x-foo/x-foo.html").is_file());
    assert!(!sandbox.path("app/elements/x-foo").exists());
}

#[test]
fn falls_back_to_current_directory() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "x-foo", "--yes"])
        .assert()
        .success();

    assert!(sandbox.path("x-foo/x-foo.html").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "tux-panel", "--yes", "-b", "app/elements", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("tux-panel-behavior.html"));

    assert!(!sandbox.path("app").exists());
}

#[test]
fn json_output_reports_resolved_config() {
    let sandbox = Sandbox::new();
    let out = sandbox
        .cmd()
        .args([
            "--output-format",
            "json",
            "new",
            "tux-panel",
            "--yes",
            "-b",
            "app/elements",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["config"]["entityNameCamel"], "tuxPanel");
    assert_eq!(value["config"]["behaviorName"], "panel-behavior");
    assert_eq!(value["config"]["pathToElements"], "..");
    assert_eq!(value["dryRun"], false);
    assert_eq!(value["files"].as_array().unwrap().len(), 3);
}

#[test]
fn manifest_view_engine_wins_over_flag() {
    let sandbox = Sandbox::new();
    sandbox.write(
        "package.json",
        r#"{ "name": "host", "generator": { "viewEngine": "jade" } }"#,
    );

    let out = sandbox
        .cmd()
        .args([
            "--output-format",
            "json",
            "new",
            "x-foo",
            "--yes",
            "--view-engine",
            "html",
            "--dry-run",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["config"]["viewEngine"], "jade");
    assert_eq!(value["dryRun"], true);
}

#[test]
fn add_to_elements_is_never_honoured() {
    let sandbox = Sandbox::new();
    sandbox.write("elements/elements.html", "<!-- registry -->\n");

    let out = sandbox
        .cmd()
        .args([
            "--output-format",
            "json",
            "new",
            "x-foo",
            "--yes",
            "--add-to-elements",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["config"]["addToElements"], false);
    assert_eq!(sandbox.read("elements/elements.html"), "<!-- registry -->\n");
}

#[test]
fn rerun_overwrites_existing_files() {
    let sandbox = Sandbox::new();
    sandbox.write("x-foo/x-foo.html", "stale");

    sandbox
        .cmd()
        .args(["new", "x-foo", "--yes"])
        .assert()
        .success();

    assert_ne!(sandbox.read("x-foo/x-foo.html"), "stale");
}

// ── templates ─────────────────────────────────────────────────────────────────

#[test]
fn partial_template_directory_falls_back_to_builtin() {
    let sandbox = Sandbox::new();
    sandbox.write("tpl/element.html", "custom <?= entityNameCapital ?>\n");

    sandbox
        .cmd()
        .args(["new", "x-foo", "--yes", "--templates", "tpl"])
        .assert()
        .success();

    assert_eq!(sandbox.read("x-foo/x-foo.html"), "custom XFoo\n");
    // style still comes from the built-in set
    assert!(sandbox.read("x-foo/x-foo-style.html").contains("x-foo"));
}

#[test]
fn broken_template_exits_with_two() {
    let sandbox = Sandbox::new();
    sandbox.write("tpl/element.html", "<?= notAVariable ?>\n");

    sandbox
        .cmd()
        .args(["new", "x-foo", "--yes", "--templates", "tpl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("notAVariable"));
}

#[test]
fn templates_lists_all_four() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("element-style"))
        .stdout(predicate::str::contains("behavior-style"))
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn templates_show_prints_source() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["templates", "--show", "element"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<?="));
}

#[test]
fn templates_show_unknown_id_exits_with_two() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["templates", "--show", "widget"])
        .assert()
        .code(2);
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_default() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "get", "defaults.view_engine"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ejs\n"));
}

#[test]
fn config_get_honours_environment() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .env("TUXGEN_DEFAULTS__VIEW_ENGINE", "jade")
        .args(["config", "get", "defaults.view_engine"])
        .assert()
        .success()
        .stdout(predicate::str::diff("jade\n"));
}

#[test]
fn config_get_unknown_key_exits_with_four() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_explicit_config_file_exits_with_four() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--config", "missing.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_file_defaults_drive_new() {
    let sandbox = Sandbox::new();
    sandbox.write(
        "tuxgen.toml",
        "[defaults]\ngenerate_behavior = false\nversion = \"2.0.0\"\n",
    );

    sandbox
        .cmd()
        .args(["--config", "tuxgen.toml", "new", "x-foo", "--yes"])
        .assert()
        .success();

    assert!(!sandbox.path("x-foo/x-foo-behavior.html").exists());
}

#[test]
fn config_path_points_at_explicit_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn init_writes_config_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--config", "tuxgen.toml", "init"])
        .assert()
        .success();

    let written = sandbox.read("tuxgen.toml");
    assert!(written.contains("[defaults]"));

    // second run without --force leaves the file alone
    sandbox.write("tuxgen.toml", "# mine\n");
    sandbox
        .cmd()
        .args(["--config", "tuxgen.toml", "init"])
        .assert()
        .success();
    assert_eq!(sandbox.read("tuxgen.toml"), "# mine\n");
}

// ── install ───────────────────────────────────────────────────────────────────

#[test]
fn failed_install_exits_with_one_and_keeps_files() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .env("PATH", "/nonexistent-tuxgen-bin")
        .args(["new", "x-foo", "--yes", "--install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("npm install"));

    assert!(sandbox.path("x-foo/x-foo.html").is_file());
}

#[test]
fn skipped_install_prints_hint() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["new", "x-foo", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm install and bower install"));
}
