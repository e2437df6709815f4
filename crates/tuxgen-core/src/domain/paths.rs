//! Entity path resolution.
//!
//! All functions here are lexical: they never touch the filesystem, so a
//! path that does not exist yet (the usual case for a new entity) resolves
//! the same way as one that does. Joins behave like a `join` that normalizes
//! as it goes: `.` segments and empty segments vanish, `..` pops a preceding
//! normal segment, and an empty result is `.`.

use std::path::{Component, Path, PathBuf};

/// Candidate base directories, probed in this order.
pub const ELEMENT_DIR_CANDIDATES: [&str; 3] = ["app/polymer/elements", "app/modules", "app/elements"];

/// Fallback base directory when no candidate exists.
pub const DEFAULT_BASE_PATH: &str = ".";

/// Absolute URL prefix of the shared bower components directory.
pub const PATH_TO_BOWER: &str = "/bower_components";

/// File stem shared by all generated files of one entity: `base/name/name`.
///
/// ```
/// use std::path::Path;
/// use tuxgen_core::domain::paths::resolve_entity_stem;
///
/// let stem = resolve_entity_stem(Path::new("app/elements"), "x-foo");
/// assert_eq!(stem, Path::new("app/elements/x-foo/x-foo"));
/// ```
pub fn resolve_entity_stem(base_path: &Path, entity_name: &str) -> PathBuf {
    join_normalized(base_path, &[Path::new(entity_name), Path::new(entity_name)])
}

/// Relative path from the directory holding `stem` back to `cwd/base_path`.
///
/// `stem` is absolutized against `cwd` when relative. `base_path` is always
/// appended *under* `cwd`, even when it is itself absolute. Identical
/// endpoints give an empty path.
pub fn resolve_relative(stem: &Path, base_path: &Path, cwd: &Path) -> PathBuf {
    let from = absolutize(&parent_dir(stem), cwd);
    let to = join_normalized(cwd, &[base_path]);
    relative_between(&from, &to)
}

/// Append the `-style.html` style of suffix to a stem.
pub fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut raw = stem.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

/// `dirname` that maps a bare file name to `.`.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from(DEFAULT_BASE_PATH),
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        join_normalized(cwd, &[path])
    }
}

/// Join `segments` onto `base`, dropping any root/prefix of the segments,
/// then normalize.
fn join_normalized(base: &Path, segments: &[&Path]) -> PathBuf {
    let mut joined = base.to_path_buf();
    for segment in segments {
        for component in segment.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => joined.push(other.as_os_str()),
            }
        }
    }
    normalize(&joined)
}

/// Lexically normalize a path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(DEFAULT_BASE_PATH);
    }

    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Relative path between two normalized absolute paths.
fn relative_between(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    rel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_repeats_entity_name() {
        assert_eq!(
            resolve_entity_stem(Path::new("app/elements"), "x-foo"),
            PathBuf::from("app/elements/x-foo/x-foo")
        );
    }

    #[test]
    fn stem_under_current_dir_drops_dot() {
        assert_eq!(
            resolve_entity_stem(Path::new("."), "x-foo"),
            PathBuf::from("x-foo/x-foo")
        );
    }

    #[test]
    fn stem_with_empty_name_degrades_to_base() {
        assert_eq!(
            resolve_entity_stem(Path::new("app/elements"), ""),
            PathBuf::from("app/elements")
        );
        assert_eq!(resolve_entity_stem(Path::new("."), ""), PathBuf::from("."));
    }

    #[test]
    fn stem_normalizes_base() {
        assert_eq!(
            resolve_entity_stem(Path::new("./app//modules/../elements/"), "x"),
            PathBuf::from("app/elements/x/x")
        );
    }

    #[test]
    fn relative_from_entity_dir_to_base_is_one_level_up() {
        let cwd = Path::new("/work/project");
        let stem = resolve_entity_stem(Path::new("app/elements"), "x-foo");
        assert_eq!(
            resolve_relative(&stem, Path::new("app/elements"), cwd),
            PathBuf::from("..")
        );
    }

    #[test]
    fn relative_for_nested_entity_name() {
        let cwd = Path::new("/work");
        let stem = resolve_entity_stem(Path::new("app"), "group/x");
        // stem = app/group/x/group/x, dirname = app/group/x/group
        assert_eq!(
            resolve_relative(&stem, Path::new("app"), cwd),
            PathBuf::from("../../..")
        );
    }

    #[test]
    fn relative_with_empty_name_points_into_base() {
        let cwd = Path::new("/work");
        let stem = resolve_entity_stem(Path::new("app/elements"), "");
        // dirname(app/elements) = app; app -> app/elements
        assert_eq!(
            resolve_relative(&stem, Path::new("app/elements"), cwd),
            PathBuf::from("elements")
        );
    }

    #[test]
    fn relative_of_identical_paths_is_empty() {
        let cwd = Path::new("/work");
        let stem = PathBuf::from("x/y");
        assert_eq!(
            resolve_relative(&stem, Path::new("x"), cwd),
            PathBuf::new()
        );
    }

    #[test]
    fn absolute_base_is_appended_under_cwd() {
        let cwd = Path::new("/work");
        let base = Path::new("/abs/elements");
        let stem = resolve_entity_stem(base, "x");
        assert_eq!(stem, PathBuf::from("/abs/elements/x/x"));
        // from /abs/elements/x to /work/abs/elements
        assert_eq!(
            resolve_relative(&stem, base, cwd),
            PathBuf::from("../../../work/abs/elements")
        );
    }

    #[test]
    fn suffix_is_appended_to_file_name() {
        let stem = PathBuf::from("app/elements/x/x");
        assert_eq!(
            with_suffix(&stem, "-style.html"),
            PathBuf::from("app/elements/x/x-style.html")
        );
    }

    #[test]
    fn normalize_handles_parent_segments() {
        assert_eq!(normalize(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("./")), PathBuf::from("."));
    }
}
