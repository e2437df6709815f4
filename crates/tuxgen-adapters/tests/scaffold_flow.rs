//! End-to-end generator flow over the real adapters.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tuxgen_adapters::{BuiltinStore, DelimiterRenderer, LocalFilesystem, MemoryFilesystem};
use tuxgen_core::prelude::*;

const ROOT: &str = "/work/project";

fn materializer(fs: &MemoryFilesystem) -> Materializer {
    Materializer::new(
        Box::new(BuiltinStore::new()),
        Box::new(DelimiterRenderer::new()),
        Box::new(fs.clone()),
    )
}

fn panel_dir() -> PathBuf {
    Path::new(ROOT).join("app/elements/tux-panel")
}

#[test]
fn element_with_behavior_writes_three_files() {
    let fs = MemoryFilesystem::new().with_dir("/work/project/app/elements");
    let resolver = ConfigResolver::new(Box::new(fs.clone()), ROOT);

    let base = resolver.detect_base_path();
    assert_eq!(base, PathBuf::from("app/elements"));

    let answers = RawAnswers::new("tux-panel")
        .with_entity_type(EntityType::Element)
        .with_behavior(true)
        .with_base_path(base);
    let config = resolver.resolve(answers);

    assert_eq!(config.entity_name_camel(), "tuxPanel");
    assert_eq!(config.behavior_name(), Some("panel-behavior"));
    assert_eq!(
        config.path_to_entity(),
        Path::new("app/elements/tux-panel/tux-panel")
    );
    assert!(!config.add_to_elements());

    let report = materializer(&fs).materialize(&config, Path::new(ROOT)).unwrap();
    assert_eq!(report.len(), 3);
    assert_eq!(
        fs.list_files(),
        vec![
            panel_dir().join("tux-panel-behavior.html"),
            panel_dir().join("tux-panel-style.html"),
            panel_dir().join("tux-panel.html"),
        ]
    );

    let view = fs.read_file(&panel_dir().join("tux-panel.html")).unwrap();
    assert!(view.contains("<dom-module id=\"tux-panel\">"));
    assert!(view.contains("/bower_components/polymer/polymer.html"));
    assert!(!view.contains("<?"));

    let behavior = fs
        .read_file(&panel_dir().join("tux-panel-behavior.html"))
        .unwrap();
    assert!(behavior.contains("Tux.PanelBehavior = {"));
}

#[test]
fn behavior_entity_writes_two_files() {
    let fs = MemoryFilesystem::new();
    let resolver = ConfigResolver::new(Box::new(fs.clone()), ROOT);

    let answers = RawAnswers::new("tux-drag")
        .with_entity_type(EntityType::Behavior)
        .with_base_path(resolver.detect_base_path());
    let config = resolver.resolve(answers);

    let report = materializer(&fs).materialize(&config, Path::new(ROOT)).unwrap();

    assert_eq!(report.len(), 2);
    let view = fs
        .read_file(Path::new("/work/project/tux-drag/tux-drag.html"))
        .unwrap();
    assert!(view.contains("@polymerBehavior Tux.DragBehavior"));
    assert!(fs.exists(Path::new("/work/project/tux-drag/tux-drag-style.html")));
    assert!(!fs.exists(Path::new("/work/project/tux-drag/tux-drag-behavior.html")));
}

#[test]
fn materializing_twice_is_idempotent() {
    let fs = MemoryFilesystem::new();
    let resolver = ConfigResolver::new(Box::new(fs.clone()), ROOT);
    let config = resolver.resolve(
        RawAnswers::new("x-foo")
            .with_behavior(true)
            .with_base_path("app/elements"),
    );
    let materializer = materializer(&fs);

    materializer.materialize(&config, Path::new(ROOT)).unwrap();
    let first: Vec<_> = fs
        .list_files()
        .into_iter()
        .map(|p| (fs.read_file(&p), p))
        .collect();

    materializer.materialize(&config, Path::new(ROOT)).unwrap();
    let second: Vec<_> = fs
        .list_files()
        .into_iter()
        .map(|p| (fs.read_file(&p), p))
        .collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn manifest_view_engine_wins() {
    let fs = MemoryFilesystem::new().with_file(
        "/work/project/package.json",
        r#"{"name": "host", "generator": {"viewEngine": "jade"}}"#,
    );
    let resolver = ConfigResolver::new(Box::new(fs.clone()), ROOT);

    let config = resolver.resolve(RawAnswers::new("x").with_view_engine(ViewEngine::Html));
    assert_eq!(config.view_engine(), ViewEngine::Jade);
}

#[test]
fn registry_presence_follows_elements_file() {
    let fs = MemoryFilesystem::new().with_dir(ROOT);
    let resolver = ConfigResolver::new(Box::new(fs.clone()), ROOT);
    assert!(!resolver.registry_present());

    let fs = fs.with_file("/work/project/elements/elements.html", "");
    let resolver = ConfigResolver::new(Box::new(fs), ROOT);
    assert!(resolver.registry_present());
}

#[test]
fn local_filesystem_flow() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("app/modules")).unwrap();
    let root = dir.path();

    let resolver = ConfigResolver::new(Box::new(LocalFilesystem::new()), root);
    let answers = RawAnswers::new("tux-card")
        .with_behavior(false)
        .with_base_path(resolver.detect_base_path());
    let config = resolver.resolve(answers);

    let materializer = Materializer::new(
        Box::new(BuiltinStore::new()),
        Box::new(DelimiterRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let report = materializer.materialize(&config, root).unwrap();

    assert_eq!(report.len(), 2);
    let view = std::fs::read_to_string(root.join("app/modules/tux-card/tux-card.html")).unwrap();
    assert!(view.contains("is: 'tux-card'"));
    assert_eq!(report.written[1], root.join("app/modules/tux-card/tux-card-style.html"));
}
