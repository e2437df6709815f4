//! Application layer for tuxgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfigResolver, Materializer, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming and path rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ConfigResolver, DirectoryProber, MaterializationReport, Materializer, TemplateInfo,
    TemplateService,
};

pub use ports::{DependencyInstaller, Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
