//! CLI argument parsing for Embudo

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON document for machine parsing
    Json,
    /// Flat CSV tables for spreadsheet import
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "embudo")]
#[command(version)]
#[command(about = "Process bottleneck analyzer for IT helpdesk event logs", long_about = None)]
pub struct Cli {
    /// Event log CSV (columns: Case_ID, Activity, Timestamp, Priority, Category)
    pub input: PathBuf,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Directory for CSV exports (created if missing; defaults to ./results with --format csv)
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// TOML file with an [analysis] table overriding the defaults
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bottleneck threshold in hours (strict greater-than filter)
    #[arg(short = 't', long = "threshold", value_name = "HOURS")]
    pub threshold: Option<f64>,

    /// Upper edge of the MODERATE severity bin in hours
    #[arg(long = "moderate-max", value_name = "HOURS")]
    pub moderate_max: Option<f64>,

    /// Upper edge of the HIGH severity bin in hours
    #[arg(long = "high-max", value_name = "HOURS")]
    pub high_max: Option<f64>,

    /// Expected annual ticket volume for the impact projection
    #[arg(long = "annual-tickets", value_name = "N")]
    pub annual_tickets: Option<u64>,

    /// Target fractional reduction in bottleneck time (e.g. 0.30)
    #[arg(long = "improvement-pct", value_name = "FRACTION")]
    pub improvement_pct: Option<f64>,

    /// Loaded cost per staff hour
    #[arg(long = "hourly-cost", value_name = "COST")]
    pub hourly_cost: Option<f64>,

    /// Number of top stages feeding the impact estimate
    #[arg(long = "top-bottlenecks", value_name = "N")]
    pub top_bottlenecks: Option<usize>,

    /// Hours in a standard work year for the FTE conversion
    #[arg(long = "work-year-hours", value_name = "HOURS")]
    pub work_year_hours: Option<f64>,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
