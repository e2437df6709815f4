//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tuxgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template lookup
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `DependencyInstaller`: npm/bower install

pub mod output;

pub use output::{
    DependencyInstaller, Filesystem, LoadedTemplate, TemplateOrigin, TemplateRenderer,
    TemplateStore,
};
