//! tuxgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the tuxgen
//! element/behavior generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            tuxgen-cli (CLI)             │
//! │    (Collects answers, drives services)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (ConfigResolver, Materializer, ...)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, Store, Renderer, Installer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tuxgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, BuiltinStore, ...)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (RawAnswers, ResolvedConfig, naming,    │
//! │  paths, MaterializationPlan)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuxgen_core::{
//!     application::{ConfigResolver, Materializer},
//!     domain::{EntityType, RawAnswers},
//! };
//!
//! // 1. Collect answers
//! let answers = RawAnswers::new("tux-panel")
//!     .with_entity_type(EntityType::Element)
//!     .with_behavior(true)
//!     .with_base_path("app/elements");
//!
//! // 2. Resolve against the host project, then write the files
//! let config = ConfigResolver::new(filesystem, "/work/project").resolve(answers);
//! let materializer = Materializer::new(store, renderer, filesystem);
//! materializer.materialize(&config, "/work/project".as_ref()).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigResolver, MaterializationReport, Materializer, TemplateInfo, TemplateService,
        ports::{
            DependencyInstaller, Filesystem, LoadedTemplate, TemplateOrigin, TemplateRenderer,
            TemplateStore,
        },
    };
    pub use crate::domain::{
        EntityType, FileRole, MaterializationPlan, PlannedFile, RawAnswers, RenderContext,
        ResolvedConfig, TemplateId, ViewEngine,
    };
    pub use crate::error::{TuxError, TuxResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
