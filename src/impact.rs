//! Financial impact projection for bottleneck reduction

use crate::config::AnalysisConfig;
use crate::cycle_time::StageSummary;
use serde::Serialize;

/// Projected savings from reducing the top bottleneck stages
///
/// A pure value object: identical inputs always produce identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactEstimate {
    /// Summed mean duration of the top stages, per ticket
    pub bottleneck_hours_per_ticket: f64,
    pub hours_saved_per_ticket: f64,
    pub annual_hours_saved: f64,
    pub annual_cost_savings: f64,
    /// Full-time-equivalent staff implied by the hours saved
    pub fte_equivalency: f64,
}

/// Project annual savings from reducing the top bottlenecks.
///
/// Selects the top `config.top_bottlenecks` stages from the full stage
/// summary (already sorted by descending mean), not from the filtered
/// bottleneck set. Fewer stages than requested is fine; however many exist
/// are used.
pub fn estimate_impact(summaries: &[StageSummary], config: &AnalysisConfig) -> ImpactEstimate {
    let bottleneck_hours_per_ticket: f64 = summaries
        .iter()
        .take(config.top_bottlenecks)
        .map(|s| s.avg_hours)
        .sum();

    let hours_saved_per_ticket = bottleneck_hours_per_ticket * config.improvement_pct;
    let annual_hours_saved = hours_saved_per_ticket * config.annual_tickets as f64;
    let annual_cost_savings = annual_hours_saved * config.hourly_cost;
    let fte_equivalency = annual_hours_saved / config.work_year_hours;

    ImpactEstimate {
        bottleneck_hours_per_ticket,
        hours_saved_per_ticket,
        annual_hours_saved,
        annual_cost_savings,
        fte_equivalency,
    }
}
