//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tuxgen_core::domain::{EntityType, ViewEngine};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tuxgen",
    bin_name = "tuxgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold elements and behaviors into an elements-style project",
    long_about = "tuxgen asks a few questions (or reads flags), derives the names and \
                  paths for a new element or behavior, and writes its view, style and \
                  optional behavior files under the project's elements directory.",
    after_help = "EXAMPLES:\n\
        \x20 tuxgen new tux-panel\n\
        \x20 tuxgen new tux-panel --yes --base-path app/elements\n\
        \x20 tuxgen new tux-drag  --type behavior --yes\n\
        \x20 tuxgen completions bash > /usr/share/bash-completion/completions/tuxgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new element or behavior.
    #[command(
        visible_alias = "n",
        about = "Generate a new element or behavior",
        after_help = "EXAMPLES:\n\
            \x20 tuxgen new                                  # ask every question\n\
            \x20 tuxgen new tux-panel --yes                  # defaults, no questions\n\
            \x20 tuxgen new tux-card  --no-behavior --view-engine html --yes\n\
            \x20 tuxgen new tux-drag  --type behavior --dry-run"
    )]
    New(NewArgs),

    /// List the templates entities are generated from.
    #[command(
        visible_alias = "ls",
        about = "List templates and where they are loaded from",
        after_help = "EXAMPLES:\n\
            \x20 tuxgen templates\n\
            \x20 tuxgen templates --templates ./my-templates\n\
            \x20 tuxgen templates --show element"
    )]
    Templates(TemplatesArgs),

    /// Initialise a tuxgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tuxgen init           # default location\n\
            \x20 tuxgen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tuxgen completions bash > ~/.local/share/bash-completion/completions/tuxgen\n\
            \x20 tuxgen completions zsh  > ~/.zfunc/_tuxgen\n\
            \x20 tuxgen completions fish > ~/.config/fish/completions/tuxgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the tuxgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tuxgen config get defaults.view_engine\n\
            \x20 tuxgen config list\n\
            \x20 tuxgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `tuxgen new`.
///
/// Every flag answers one question; questions answered by a flag are not
/// asked.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Entity name, e.g. `tux-panel`.  Skips the name question.
    #[arg(value_name = "ENTITY_NAME", help = "Name of the element or behavior")]
    pub entity_name: Option<String>,

    /// Entity type.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Entity type"
    )]
    pub entity_type: Option<EntityTypeArg>,

    /// Do not generate a companion behavior for an element.
    #[arg(long = "no-behavior", help = "Do not generate a behavior for the element")]
    pub no_behavior: bool,

    /// Version written into the generated files.
    #[arg(long = "version-tag", value_name = "VERSION", help = "Entity version")]
    pub version_tag: Option<String>,

    /// View engine, unless the host project's package.json records one.
    #[arg(
        short = 'e',
        long = "view-engine",
        value_name = "ENGINE",
        value_enum,
        help = "View engine"
    )]
    pub view_engine: Option<ViewEngineArg>,

    /// Directory the entity directory is created in.
    #[arg(
        short = 'b',
        long = "base-path",
        value_name = "DIR",
        help = "Base path (default: first existing elements directory, or .)"
    )]
    pub base_path: Option<PathBuf>,

    /// Run npm install and bower install afterwards.
    #[arg(long = "install", help = "Install dependencies after generating")]
    pub install: bool,

    /// Answer yes to the elements registry question.
    #[arg(long = "add-to-elements", help = "Add the entity to elements/elements.html")]
    pub add_to_elements: bool,

    /// Use defaults for every unanswered question.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Do not ask questions; use flags and defaults"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Directory of templates overriding the built-in ones.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template directory (falls back to built-in templates)"
    )]
    pub templates: Option<PathBuf>,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `tuxgen templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Directory of templates overriding the built-in ones.
    #[arg(long = "templates", value_name = "DIR", help = "Template directory")]
    pub templates: Option<PathBuf>,

    /// Print one template's raw text.
    #[arg(long = "show", value_name = "ID", help = "Print a template's source")]
    pub show: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tuxgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tuxgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tuxgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.view_engine`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Entity types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EntityTypeArg {
    Element,
    /// Also accepted as `behaviour`.
    #[value(alias = "behaviour")]
    Behavior,
}

impl From<EntityTypeArg> for EntityType {
    fn from(arg: EntityTypeArg) -> Self {
        match arg {
            EntityTypeArg::Element => Self::Element,
            EntityTypeArg::Behavior => Self::Behavior,
        }
    }
}

/// View engines accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewEngineArg {
    Html,
    Ejs,
    /// Also accepted as `pug`.
    #[value(alias = "pug")]
    Jade,
}

impl From<ViewEngineArg> for ViewEngine {
    fn from(arg: ViewEngineArg) -> Self {
        match arg {
            ViewEngineArg::Html => Self::Html,
            ViewEngineArg::Ejs => Self::Ejs,
            ViewEngineArg::Jade => Self::Jade,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
