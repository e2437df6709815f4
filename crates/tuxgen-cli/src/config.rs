//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TUXGEN_<SECTION>__<KEY>`, e.g.
//!    `TUXGEN_DEFAULTS__VIEW_ENGINE=html`
//! 3. Config file (`--config FILE`, or [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use tuxgen_core::domain::{DEFAULT_ENTITY_NAME, DEFAULT_VERSION, EntityType, ViewEngine};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "TUXGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for `tuxgen new`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// Answers used when a question is not asked, and prompt defaults when it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub entity_name: String,
    pub entity_type: EntityType,
    /// Generate a behavior alongside new elements.
    pub generate_behavior: bool,
    pub version: String,
    pub view_engine: ViewEngine,
    pub skip_install: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose `<id>.html` files override the built-in templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            entity_name: DEFAULT_ENTITY_NAME.into(),
            entity_type: EntityType::Element,
            generate_behavior: true,
            version: DEFAULT_VERSION.into(),
            view_engine: ViewEngine::Ejs,
            skip_install: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is used if a file is there.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = ::config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => ::config::File::from(path.as_path()).required(true),
            None => ::config::File::from(Self::config_path()).required(false),
        };

        let settings = ::config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tuxgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tuxgen", "tuxgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tuxgen.toml"))
    }

    /// The file [`Self::load`] reads: the explicit one, else the default path.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Template directory from config, relative paths taken from `root`.
    pub fn template_dir(&self, root: &Path) -> Option<PathBuf> {
        self.templates.local_path.as_ref().map(|p| root.join(p))
    }
}
