//! Infrastructure adapters for tuxgen.
//!
//! This crate implements the ports defined in `tuxgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{InstallStep, ProcessInstaller};
pub use renderer::DelimiterRenderer;
pub use template_store::{BuiltinStore, DirectoryStore, LayeredStore};
