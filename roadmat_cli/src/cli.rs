//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use roadmat_core::config::OutputFormat;

/// Output format flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "roadmat")]
#[command(version)]
#[command(about = "Road construction material recommender")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to ./roadmat.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON material catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (table, json). Uses settings value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<FormatArg>,

    /// Verbose logging (debug level)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank materials for a project site
    Recommend {
        /// Project location (display only)
        #[arg(long, short = 'l')]
        location: String,

        /// Traffic load (low, medium, high, very high)
        #[arg(long, short = 't')]
        traffic: String,

        /// Weather (hot, moderate, cold, wet, dry)
        #[arg(long, short = 'w')]
        weather: String,

        /// Soil type (granular, rocky, clayey, silty)
        #[arg(long, short = 's')]
        soil: String,

        /// Reject unrecognized traffic/weather/soil values instead of substituting
        #[arg(long)]
        strict: bool,

        /// Show only the top N materials (0 = all). Uses settings value if not specified.
        #[arg(long, short = 'n')]
        top: Option<usize>,
    },

    /// List the materials in the catalog
    Materials,

    /// List accepted traffic, weather and soil values
    Options,
}
