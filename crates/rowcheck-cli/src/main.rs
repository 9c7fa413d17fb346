//! rowcheck command-line entry point.

use clap::{ColorChoice, Parser};
use rowcheck_cli::logging::{LogConfig, LogFormat, init_logging};
use rowcheck_cli::pipeline::{PipelineError, exit_code};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_check, run_fields, run_verify};
use crate::summary::{print_check_summary, print_stdout, print_verify_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit_code::FAILURE);
    }
    let code = match &cli.command {
        Command::Check(args) => match run_check(args) {
            Ok(result) => finish(
                print_stdout(&result.record.checksum).and_then(|()| print_check_summary(&result)),
            ),
            Err(error) => report(&error),
        },
        Command::Verify(args) => match run_verify(args) {
            Ok(result) => finish(print_verify_summary(&result)),
            Err(error) => report(&error),
        },
        Command::Fields => match run_fields() {
            Ok(()) => exit_code::SUCCESS,
            Err(error) => report(&error),
        },
    };
    std::process::exit(code);
}

fn finish(printed: io::Result<()>) -> i32 {
    match printed {
        Ok(()) => exit_code::SUCCESS,
        Err(error) => {
            eprintln!("error: failed to write to stdout: {error}");
            exit_code::FAILURE
        }
    }
}

/// Print the full error chain and pick the matching exit code.
fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    error
        .downcast_ref::<PipelineError>()
        .map_or(exit_code::FAILURE, PipelineError::exit_code)
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
    config.with_timestamps = cli.log_timestamps;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
