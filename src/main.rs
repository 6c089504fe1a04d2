use anyhow::{Context, Result};
use clap::Parser;
use embudo::{
    analysis,
    cli::{Cli, OutputFormat},
    config::AnalysisConfig,
    csv_output,
    event_log::EventLog,
    json_output, report,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Build the effective config: defaults, then the config file, then CLI flags
fn resolve_config(args: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_path(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config.bottleneck_threshold_hours = threshold;
    }
    if let Some(moderate_max) = args.moderate_max {
        config.moderate_max_hours = moderate_max;
    }
    if let Some(high_max) = args.high_max {
        config.high_max_hours = high_max;
    }
    if let Some(annual_tickets) = args.annual_tickets {
        config.annual_tickets = annual_tickets;
    }
    if let Some(improvement_pct) = args.improvement_pct {
        config.improvement_pct = improvement_pct;
    }
    if let Some(hourly_cost) = args.hourly_cost {
        config.hourly_cost = hourly_cost;
    }
    if let Some(top_bottlenecks) = args.top_bottlenecks {
        config.top_bottlenecks = top_bottlenecks;
    }
    if let Some(work_year_hours) = args.work_year_hours {
        config.work_year_hours = work_year_hours;
    }

    if !(0.0..=1.0).contains(&config.improvement_pct) {
        anyhow::bail!(
            "Invalid value for --improvement-pct: {} (must be between 0.0 and 1.0)",
            config.improvement_pct
        );
    }
    if config.bottleneck_threshold_hours < 0.0 {
        anyhow::bail!(
            "Invalid value for --threshold: {} (must be >= 0)",
            config.bottleneck_threshold_hours
        );
    }
    if config.moderate_max_hours > config.high_max_hours {
        anyhow::bail!(
            "Invalid severity bins: --moderate-max {} exceeds --high-max {}",
            config.moderate_max_hours,
            config.high_max_hours
        );
    }
    if config.work_year_hours <= 0.0 {
        anyhow::bail!(
            "Invalid value for --work-year-hours: {} (must be > 0)",
            config.work_year_hours
        );
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    let log = EventLog::from_csv_path(&args.input)?;
    tracing::debug!(
        events = log.event_count(),
        cases = log.case_count(),
        "event log loaded"
    );

    let analysis = analysis::run(&log, &config);

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&analysis, &config)),
        OutputFormat::Json => println!("{}", json_output::render(&analysis)?),
        OutputFormat::Csv => {
            let dir = args
                .out_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("results"));
            csv_output::write_exports(&dir, &analysis)
                .with_context(|| format!("cannot write exports to {}", dir.display()))?;
            eprintln!("Results exported to {}", dir.display());
        }
    }

    // Text and JSON reports can additionally export the CSV tables
    if !matches!(args.format, OutputFormat::Csv) {
        if let Some(dir) = &args.out_dir {
            csv_output::write_exports(dir, &analysis)
                .with_context(|| format!("cannot write exports to {}", dir.display()))?;
            eprintln!("Results exported to {}", dir.display());
        }
    }

    Ok(())
}
