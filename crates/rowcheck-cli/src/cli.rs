//! CLI argument definitions for rowcheck.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rowcheck_ingest::{ScanOptions, TextEncoding};

#[derive(Parser)]
#[command(
    name = "rowcheck",
    version,
    about = "Validate delimited rows against field patterns and checksum the failures",
    long_about = "Validate every row of a semicolon-delimited UTF-16 file against a fixed\n\
                  table of field patterns, then write the variant and the MD5 checksum of\n\
                  the failing row numbers to a JSON result file."
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

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
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

    /// Prefix pretty/compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the input file and write the result file.
    Check(CheckArgs),

    /// Recompute the checksum and compare it with a stored result file.
    Verify(VerifyArgs),

    /// List the field pattern table.
    Fields,
}

/// Options shared by every command that reads an input file.
#[derive(Args)]
pub struct InputArgs {
    /// Delimited input file; the first line is the header.
    #[arg(value_name = "INPUT", default_value = "80.csv")]
    pub input: PathBuf,

    /// Text encoding of the input. A byte-order mark takes precedence.
    #[arg(long = "encoding", value_enum, default_value = "utf-16")]
    pub encoding: EncodingArg,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl InputArgs {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_delimiter(self.delimiter)
            .with_encoding(self.encoding.into())
    }
}

#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Result file to write (overwritten if present).
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "result.json")]
    pub output: PathBuf,

    /// Variant number recorded in the result file.
    #[arg(long = "variant", default_value_t = 80)]
    pub variant: u32,

    /// Validate and print the checksum without writing the result file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Stored result file to compare against.
    #[arg(long = "result", value_name = "PATH", default_value = "result.json")]
    pub result: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    #[value(name = "utf-16")]
    Utf16,
    #[value(name = "utf-16le")]
    Utf16Le,
    #[value(name = "utf-16be")]
    Utf16Be,
    #[value(name = "utf-8")]
    Utf8,
}

impl From<EncodingArg> for TextEncoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Utf16 => TextEncoding::Utf16,
            EncodingArg::Utf16Le => TextEncoding::Utf16Le,
            EncodingArg::Utf16Be => TextEncoding::Utf16Be,
            EncodingArg::Utf8 => TextEncoding::Utf8,
        }
    }
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

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{value}'"
        )),
    }
}
