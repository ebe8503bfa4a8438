//! CLI for the favgrab site-icon fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use favgrab_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_report, run_scan};

/// Top-level CLI for favgrab.
#[derive(Debug, Parser)]
#[command(name = "favgrab")]
#[command(
    about = "favgrab: download the site icons referenced by an embedded mock-data literal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every HTTP icon referenced by the input file.
    Run {
        /// JS file containing the `export const mockData` assignment.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory the `<domain>.ico` files are written to.
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Re-download icons that already exist locally.
        #[arg(long)]
        refresh: bool,
    },

    /// List the icon tasks without downloading anything.
    Scan {
        /// JS file containing the `export const mockData` assignment.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// List the `*.ico` files currently in the output directory.
    Report {
        /// Directory to list.
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                input,
                output,
                refresh,
            } => {
                if let Some(path) = input {
                    cfg.input_file = path;
                }
                if let Some(path) = output {
                    cfg.output_dir = path;
                }
                run_fetch(&cfg, refresh)
            }
            CliCommand::Scan { input } => {
                if let Some(path) = input {
                    cfg.input_file = path;
                }
                run_scan(&cfg)
            }
            CliCommand::Report { output } => {
                if let Some(path) = output {
                    cfg.output_dir = path;
                }
                run_report(&cfg)
            }
        }
    }
}
