//! CLI for urlrank.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlrank_core::config::{self, RankConfig};
use urlrank_core::logging;
use urlrank_core::rank::RankStrategy;

use commands::{run_completions, run_man, run_print_config, run_rank};

/// Top-level CLI. With no subcommand it counts `urls.txt` into `result.txt`.
#[derive(Debug, Parser)]
#[command(name = "urlrank", version)]
#[command(about = "Rank URLs in a file by how often they occur", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Overrides for the default run. Unset flags fall back to the config file, then defaults.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Input file, one URL per line [default: urls.txt].
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file, overwritten [default: result.txt].
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of ranked rows to write [default: 100].
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Top-N selection strategy: sort or heap.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<RankStrategy>,

    /// Read config from this file instead of ~/.config/urlrank/config.toml.
    #[arg(long = "config", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    pub summary_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the effective configuration as TOML.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl RunArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<RankConfig> {
        let mut cfg = match &self.config_file {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default()?,
        };
        if let Some(input) = &self.input {
            cfg.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            cfg.output_path = output.clone();
        }
        if let Some(top) = self.top {
            cfg.top_n = top;
        }
        if let Some(strategy) = self.strategy {
            cfg.strategy = strategy;
        }
        Ok(cfg)
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Generators need neither the config nor a log file.
        match cli.command {
            Some(CliCommand::Completions { shell }) => return run_completions(shell),
            Some(CliCommand::Man) => return run_man(),
            Some(CliCommand::Config) | None => {}
        }

        let cfg = cli.run.resolve_config()?;
        if let Err(err) = logging::init_logging(cfg.log_file.as_deref()) {
            logging::init_logging_stderr();
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
        }
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command {
            Some(CliCommand::Config) => run_print_config(&cfg)?,
            _ => run_rank(&cfg, cli.run.summary_json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
