pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for hangsel
#[derive(Parser, Debug)]
#[command(name = "hangsel")]
#[command(about = "DICOM hanging protocol image set selection tool")]
#[command(version)]
pub struct Cli {
    /// Path to a hanging protocol DICOM file
    #[arg(value_name = "FILE", required_unless_present = "describe")]
    pub file: Option<PathBuf>,

    /// Describe an attribute tag (e.g. "(0072,0020)" or "00720020") and exit
    #[arg(short, long, value_name = "TAG")]
    pub describe: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also report resolved selector values per image set definition
    #[arg(short, long)]
    pub selectors: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
