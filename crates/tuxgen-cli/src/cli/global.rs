//! Flags shared by every tuxgen subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level for the scaffolding run, raised once per `-v`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more of what tuxgen detects and writes (-v, -vv, -vvv)",
        long_help = "Raise the log level of a run:
    (none)  - warnings, e.g. an unreadable package.json
    -v      - files materialized, manifest overrides, installs
    -vv     - detected base path and view engine, template sources
    -vvv    - every directory probed and template layer searched"
    )]
    pub verbose: u8,

    /// Print errors and requested JSON only.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Skip the summary and progress lines; errors still print"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Print the generation summary without colour"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "tuxgen.toml to use instead of the one in the user config dir"
    )]
    pub config: Option<PathBuf>,

    /// Falls back to `output.format` in the config file when left at `auto`.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to report results; json prints the resolved entity config and files"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Config file setting, then human on a terminal and plain otherwise.
    #[default]
    Auto,
    /// Coloured summary with the file tree.
    Human,
    /// Same summary, no ANSI codes.
    Plain,
    /// One JSON document per command.
    Json,
}
