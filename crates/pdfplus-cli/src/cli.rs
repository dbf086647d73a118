//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pdfplus",
    version,
    about = "Inspect XFDF redirects and PDF view state",
    long_about = "Inspect XFDF redirects and PDF view state.\n\n\
                  Resolves the external PDF an XFDF descriptor points to, exactly as the\n\
                  viewer would, and converts saved view states to page links."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the external PDF referenced by an XFDF descriptor.
    Resolve(ResolveArgs),

    /// Print the page link for a serialized view state.
    Subpath(SubpathArgs),

    /// Show the settings file location and effective settings.
    Config,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Vault root directory.
    #[arg(long = "vault", value_name = "DIR")]
    pub vault: PathBuf,

    /// Descriptor path relative to the vault root.
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: String,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SubpathArgs {
    /// View state as a JSON object, e.g. '{"page":3,"left":0,"top":120,"zoom":1.5}'.
    #[arg(value_name = "STATE_JSON")]
    pub state: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
