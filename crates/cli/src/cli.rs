use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dealvault_core::errors::CoreError;
use dealvault_core::models::deal::DealStatus;

#[derive(Parser, Debug)]
#[command(name = "dealvault", author, version, about = "Track lifetime software deals and what they saved you", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// JSON vault config (latencies, seeding, recent-deal count)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the simulated repository latency
    #[arg(long)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dashboard metrics and recent deals
    Summary,
    /// List deals, optionally narrowed by criteria
    List {
        /// Substring of product name, description or platform
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        /// active, pending, expired or cancelled (any case)
        #[arg(long, value_parser = parse_status)]
        status: Option<DealStatus>,
    },
    /// Search deals across name, description, category and platform
    Search { query: String },
    /// Category overview computed from deals
    Categories,
    /// Platform overview computed from deals
    Platforms,
    /// Purchase dates, or the deals bought on one date
    Calendar {
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print every deal as JSON
    Export,
}

fn parse_status(raw: &str) -> Result<DealStatus, CoreError> {
    raw.parse()
}
