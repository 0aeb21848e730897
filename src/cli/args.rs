//! Command line argument parsing for the quickdoc CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::document::field::{Index, Store};

/// quickdoc - flatten nested records into search documents
#[derive(Parser, Debug, Clone)]
#[command(name = "quickdoc")]
#[command(about = "Flatten nested records into path-prefixed search document fields")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuickdocArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuickdocArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Flatten a JSONL file into documents and print their fields
    Flatten(FlattenArgs),
}

/// Arguments for flattening a JSONL file
#[derive(Parser, Debug, Clone)]
pub struct FlattenArgs {
    /// JSONL input file, one JSON object per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file with default store/index policies
    #[arg(short, long, value_name = "FILE", env = "QUICKDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default store policy (overrides the config file)
    #[arg(long, value_enum)]
    pub store: Option<StoreArg>,

    /// Default index policy (overrides the config file)
    #[arg(long, value_enum)]
    pub index: Option<IndexArg>,

    /// Stop after this many documents
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Store policy as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreArg {
    Yes,
    No,
}

impl From<StoreArg> for Store {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Yes => Store::Yes,
            StoreArg::No => Store::No,
        }
    }
}

/// Index policy as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexArg {
    No,
    Analyzed,
    NotAnalyzed,
    AnalyzedNoNorms,
    NotAnalyzedNoNorms,
}

impl From<IndexArg> for Index {
    fn from(arg: IndexArg) -> Self {
        match arg {
            IndexArg::No => Index::No,
            IndexArg::Analyzed => Index::Analyzed,
            IndexArg::NotAnalyzed => Index::NotAnalyzed,
            IndexArg::AnalyzedNoNorms => Index::AnalyzedNoNorms,
            IndexArg::NotAnalyzedNoNorms => Index::NotAnalyzedNoNorms,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
