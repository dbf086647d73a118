//! PdfPlus diagnostics CLI.

use clap::{ColorChoice, Parser};
use pdfplus_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use pdfplus_cli::commands::{print_resolve, run_config, run_resolve, run_subpath};
use pdfplus_cli::logging::{LogConfig, LogFormat, init_logging};
use pdfplus_view::Settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let (config_path, settings) = match &cli.config {
        Some(path) => (path.clone(), Settings::load_from(path)),
        None => (Settings::config_path(), Settings::load()),
    };

    let exit_code = match cli.command {
        Command::Resolve(args) => match run_resolve(&args, &settings).await {
            Ok(outcome) => match print_resolve(&outcome, args.json) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Subpath(args) => match run_subpath(&args.state) {
            Ok(Some(subpath)) => {
                println!("{subpath}");
                0
            }
            Ok(None) => {
                eprintln!("error: view state has no page");
                1
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Config => match run_config(&config_path, &settings) {
            Ok(output) => {
                print!("{output}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
