//! Configuration Resolver - turns raw answers into a `ResolvedConfig`.
//!
//! Owns every environment query the resolution needs:
//! 1. Base-path detection over the known element directories
//! 2. Elements registry existence (gates one question)
//! 3. Host manifest view engine (overrides one answer)

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::Filesystem, services::directory_prober::DirectoryProber},
    domain::{RawAnswers, ResolvedConfig, ViewEngine, paths::ELEMENT_DIR_CANDIDATES},
};

/// Host project manifest, relative to the invocation root.
pub const HOST_MANIFEST: &str = "package.json";

/// Central elements registry, relative to the invocation root.
pub const ELEMENTS_REGISTRY: &str = "elements/elements.html";

#[derive(Debug, Deserialize)]
struct HostManifest {
    generator: Option<GeneratorSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorSection {
    view_engine: Option<String>,
}

/// Resolves answers against the host project found at `root`.
///
/// The host manifest is read at most once per resolver; later lookups reuse
/// the first result.
pub struct ConfigResolver {
    filesystem: Box<dyn Filesystem>,
    root: PathBuf,
    manifest_engine: OnceLock<Option<ViewEngine>>,
}

impl ConfigResolver {
    /// Create a resolver for the project rooted at `root` (normally the
    /// absolute current directory).
    pub fn new(filesystem: Box<dyn Filesystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            root: root.into(),
            manifest_engine: OnceLock::new(),
        }
    }

    /// Default base path: first existing element directory, or `.`.
    pub fn detect_base_path(&self) -> PathBuf {
        DirectoryProber::new(self.filesystem.as_ref(), &self.root).probe(ELEMENT_DIR_CANDIDATES)
    }

    /// Whether the elements registry exists (the `addToElements` question
    /// is only asked then).
    pub fn registry_present(&self) -> bool {
        self.filesystem.exists(&self.root.join(ELEMENTS_REGISTRY))
    }

    /// View engine recorded in the host manifest.
    ///
    /// Missing, unreadable or malformed manifests, and unknown engine names,
    /// all count as "nothing recorded".
    pub fn detect_view_engine(&self) -> Option<ViewEngine> {
        *self
            .manifest_engine
            .get_or_init(|| self.read_manifest_engine())
    }

    fn read_manifest_engine(&self) -> Option<ViewEngine> {
        let path = self.root.join(HOST_MANIFEST);
        if !self.filesystem.exists(&path) {
            return None;
        }

        let raw = match self.filesystem.read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Host manifest unreadable, ignoring");
                return None;
            }
        };

        let manifest: HostManifest = match serde_json::from_str(&raw) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Host manifest malformed, ignoring");
                return None;
            }
        };

        let recorded = manifest.generator.and_then(|g| g.view_engine)?;
        match recorded.parse::<ViewEngine>() {
            Ok(engine) => {
                debug!(view_engine = %engine, "View engine recorded in host manifest");
                Some(engine)
            }
            Err(e) => {
                warn!(error = %e, "Host manifest records an unknown view engine, ignoring");
                None
            }
        }
    }

    /// Build the resolved configuration.
    #[instrument(
        skip_all,
        fields(
            entity = %answers.entity_name,
            entity_type = %answers.entity_type,
            base_path = %answers.base_path.display()
        )
    )]
    pub fn resolve(&self, answers: RawAnswers) -> ResolvedConfig {
        if answers.add_to_elements {
            debug!("addToElements answer is not honoured; resolving to false");
        }

        let manifest_engine = self.detect_view_engine();
        if let Some(engine) = manifest_engine {
            if engine != answers.view_engine {
                info!(
                    answered = %answers.view_engine,
                    recorded = %engine,
                    "Using view engine recorded in host manifest"
                );
            }
        }

        let config = ResolvedConfig::resolve(answers, manifest_engine, &self.root);

        debug!(
            path_to_entity = %config.path_to_entity().display(),
            path_to_elements = %config.path_to_elements().display(),
            behavior = config.behavior_name().unwrap_or("none"),
            "Configuration resolved"
        );

        config
    }
}
