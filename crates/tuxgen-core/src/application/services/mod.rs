//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! generator's use cases: resolve answers, write the entity files, list
//! templates.

pub mod config_resolver;
pub mod directory_prober;
pub mod materializer;
pub mod template_service;

pub use config_resolver::{ConfigResolver, ELEMENTS_REGISTRY, HOST_MANIFEST};
pub use directory_prober::DirectoryProber;
pub use materializer::{MaterializationReport, Materializer};
pub use template_service::{TemplateInfo, TemplateService};
