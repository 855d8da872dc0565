//! Command-line interface for the `tracelink` filter.
//!
//! Reads console output from a file or stdin and writes every line back,
//! with recognized trace/diagnostic locations turned into anchors.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracelink_config::{Config, LogLevel};

use crate::compound::CompoundCustomizer;
use crate::config_bridge::build_compound;
use crate::target::NavigationTarget;

/// tracelink - link stack traces and compiler diagnostics in console output
#[derive(Parser, Debug)]
#[command(name = "tracelink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file (defaults to stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/tracelink/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output representation
    #[arg(long, value_enum, default_value_t = EmitFormat::Text)]
    pub emit: EmitFormat,

    /// Log level for /tmp/tracelink_debug.log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

/// How processed lines are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    /// The rewritten line as text
    Text,
    /// One JSON object per line with text, customizer id and target
    Json,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| format!("unknown log level '{value}'"))
}

/// JSON record written per line with `--emit json`.
#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    text: &'a str,
    customizer: Option<&'a str>,
    target: Option<&'a NavigationTarget>,
}

impl Cli {
    /// Load the config named on the command line, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => Config::load().context("failed to load config"),
        }
    }

    /// Effective log level: the flag wins over the config file.
    pub fn effective_log_level(&self, config: &Config) -> LogLevel {
        self.log_level.unwrap_or(config.log_level)
    }
}

/// Run one dispatcher over every line of `input`, writing results to `output`
/// in input order.
pub fn filter_stream<R: BufRead, W: Write>(
    compound: &mut CompoundCustomizer,
    mut input: R,
    mut output: W,
    emit: EmitFormat,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input line")?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        // Stray non-UTF-8 bytes are replaced, not fatal. A trailing `\r`
        // stays on the line so CRLF input comes back as CRLF.
        let line = String::from_utf8_lossy(&buf);
        let processed = compound.process_line(&line);
        match emit {
            EmitFormat::Text => writeln!(output, "{}", processed.text)?,
            EmitFormat::Json => {
                let record = JsonLine {
                    text: &processed.text,
                    customizer: processed.customizer.as_deref(),
                    target: processed.target.as_ref(),
                };
                serde_json::to_writer(&mut output, &record)?;
                writeln!(output)?;
            }
        }
    }
    output.flush()?;
    Ok(())
}

/// Execute the filter described by `cli` against stdout.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let mut compound = build_compound(config);
    log::info!(
        "Filtering with customizers [{}]",
        compound.customizer_ids().join(", ")
    );

    let stdout = io::stdout();
    let output = io::BufWriter::new(stdout.lock());
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            filter_stream(&mut compound, BufReader::new(file), output, cli.emit)
        }
        None => filter_stream(&mut compound, io::stdin().lock(), output, cli.emit),
    }
}
