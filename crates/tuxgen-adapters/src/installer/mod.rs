//! Dependency installer adapters.

mod process;

pub use process::{InstallStep, ProcessInstaller};
