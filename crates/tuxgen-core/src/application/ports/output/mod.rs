//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tuxgen-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{RenderContext, TemplateId};
use crate::error::TuxResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tuxgen_adapters::filesystem::LocalFilesystem` (production)
/// - `tuxgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Relative paths are interpreted by the adapter; services always pass
/// paths already joined onto the invocation root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TuxResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> TuxResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> TuxResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// Compiled into the binary.
    Builtin,
    /// Read from a file on disk.
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A template's raw text and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub id: TemplateId,
    pub origin: TemplateOrigin,
    pub content: String,
}

/// Port for template lookup.
///
/// Implemented by:
/// - `tuxgen_adapters::template_store::BuiltinStore` (embedded templates)
/// - `tuxgen_adapters::template_store::DirectoryStore` (user directory)
/// - `tuxgen_adapters::template_store::LayeredStore` (directory over built-in)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a template by identifier.
    fn get(&self, id: TemplateId) -> TuxResult<LoadedTemplate>;

    /// Human-readable description of where templates are looked up.
    fn location(&self) -> String;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `tuxgen_adapters::renderer::DelimiterRenderer` (`<?= name ?>` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one template's text with the given context.
    fn render(&self, template: &LoadedTemplate, context: &RenderContext) -> TuxResult<String>;
}

/// Port for the post-materialization dependency install.
///
/// Implemented by:
/// - `tuxgen_adapters::installer::ProcessInstaller` (npm + bower)
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    /// Install the host project's dependencies in `root`.
    fn install(&self, root: &Path) -> TuxResult<()>;
}
