//! CLI for the urinorm URI normalizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use urinorm_core::config::{self, OutputFormat};

use commands::{read_inputs, run_inspect, run_normalize};

/// Top-level CLI for urinorm.
#[derive(Debug, Parser)]
#[command(name = "urinorm")]
#[command(about = "urinorm: interpret arbitrary strings as URIs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the normalized URI for each input.
    Normalize {
        /// Strings to normalize. Read from stdin, one per line, when omitted.
        inputs: Vec<String>,
        /// Output format: text or json (defaults to `output` in config.toml).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Show which fallback tier accepted each input and its decoded components.
    Inspect {
        /// Strings to inspect. Read from stdin, one per line, when omitted.
        inputs: Vec<String>,
        /// Output format: text or json (defaults to `output` in config.toml).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Normalize { inputs, format } => {
                let inputs = read_inputs(inputs, io::stdin().lock())?;
                run_normalize(
                    &inputs,
                    format.unwrap_or(cfg.output),
                    cfg.fail_fast,
                    &mut out,
                )?;
            }
            CliCommand::Inspect { inputs, format } => {
                let inputs = read_inputs(inputs, io::stdin().lock())?;
                run_inspect(
                    &inputs,
                    format.unwrap_or(cfg.output),
                    cfg.fail_fast,
                    &mut out,
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
