//! Human-readable text report
//!
//! Sectioned console report over the full analysis. Numbers are shown with
//! two decimals; the underlying values keep full precision.

use crate::analysis::Analysis;
use crate::config::AnalysisConfig;
use std::fmt::Write;

const RULE: &str =
    "================================================================================";

/// Render the analysis as the default terminal report
pub fn render(analysis: &Analysis, config: &AnalysisConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Loaded {} events for {} tickets",
        analysis.event_count, analysis.case_count
    );
    out.push('\n');

    render_stage_summary(&mut out, analysis);
    render_bottlenecks(&mut out, analysis, config);
    render_priority_cross_tab(&mut out, analysis);
    render_resolution_by_category(&mut out, analysis);
    render_impact(&mut out, analysis, config);
    render_recommendations(&mut out, analysis);

    out
}

fn stage_column_width(analysis: &Analysis) -> usize {
    analysis
        .stage_summary
        .iter()
        .map(|s| s.from_stage.len())
        .max()
        .unwrap_or(0)
        .max("From_Stage".len())
}

fn render_stage_summary(out: &mut String, analysis: &Analysis) {
    let width = stage_column_width(analysis);
    let _ = writeln!(out, "Average Cycle Time by Stage:");
    let _ = writeln!(
        out,
        "{:<width$} {:>10} {:>13} {:>10} {:>6}",
        "From_Stage", "Avg_Hours", "Median_Hours", "Std_Hours", "Count"
    );
    let _ = writeln!(
        out,
        "{:-<width$} ---------- ------------- ---------- ------",
        ""
    );
    for summary in &analysis.stage_summary {
        let std_display = summary
            .std_hours
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<width$} {:>10.2} {:>13.2} {:>10} {:>6}",
            summary.from_stage, summary.avg_hours, summary.median_hours, std_display, summary.count
        );
    }
}

fn render_bottlenecks(out: &mut String, analysis: &Analysis, config: &AnalysisConfig) {
    let _ = writeln!(out, "\n{RULE}\n");
    let _ = writeln!(
        out,
        "CRITICAL BOTTLENECKS IDENTIFIED ({} stages above {:.1}h):",
        analysis.bottlenecks.len(),
        config.bottleneck_threshold_hours
    );
    if analysis.bottlenecks.is_empty() {
        let _ = writeln!(out, "  none");
        return;
    }
    let width = stage_column_width(analysis);
    let _ = writeln!(
        out,
        "{:<width$} {:>10} {:>6}  Severity",
        "From_Stage", "Avg_Hours", "Count"
    );
    for bottleneck in &analysis.bottlenecks {
        let _ = writeln!(
            out,
            "{:<width$} {:>10.2} {:>6}  {}",
            bottleneck.summary.from_stage,
            bottleneck.summary.avg_hours,
            bottleneck.summary.count,
            bottleneck.severity
        );
    }
}

fn render_priority_cross_tab(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(out, "\n{RULE}\n");
    let _ = writeln!(out, "BOTTLENECK DURATION BY PRIORITY (mean hours):");
    let tab = &analysis.priority_cross_tab;
    if tab.rows.is_empty() {
        let _ = writeln!(out, "  no transitions observed");
        return;
    }
    let width = stage_column_width(analysis);
    let mut header = format!("{:<width$}", "From_Stage");
    for priority in &tab.priorities {
        let _ = write!(header, " {priority:>10}");
    }
    let _ = writeln!(out, "{header}");
    for (row_index, row) in tab.rows.iter().enumerate() {
        let mut line = format!("{:<width$}", row.from_stage);
        for column in 0..tab.priorities.len() {
            // Zero-fill is presentation only; counts stay in the cross-tab
            let _ = write!(line, " {:>10.2}", tab.mean_or_zero(row_index, column));
        }
        let _ = writeln!(out, "{line}");
    }
}

fn render_resolution_by_category(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(out, "\n{RULE}\n");
    let _ = writeln!(out, "AVERAGE RESOLUTION TIME BY CATEGORY:");
    let width = analysis
        .resolution_by_category
        .iter()
        .map(|c| c.category.len())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    let _ = writeln!(out, "{:<width$} {:>10} {:>6}", "Category", "Avg_Hours", "Count");
    for category in &analysis.resolution_by_category {
        let _ = writeln!(
            out,
            "{:<width$} {:>10.2} {:>6}",
            category.category, category.avg_hours, category.count
        );
    }
}

fn render_impact(out: &mut String, analysis: &Analysis, config: &AnalysisConfig) {
    let impact = &analysis.impact;
    let _ = writeln!(out, "\n{RULE}\n");
    let _ = writeln!(
        out,
        "BUSINESS IMPACT OF {:.0}% BOTTLENECK REDUCTION:",
        config.improvement_pct * 100.0
    );
    let _ = writeln!(
        out,
        "  Current bottleneck time per ticket: {:.2} hours",
        impact.bottleneck_hours_per_ticket
    );
    let _ = writeln!(
        out,
        "  Time saved per ticket: {:.2} hours",
        impact.hours_saved_per_ticket
    );
    let _ = writeln!(
        out,
        "  Annual hours saved: {:.0} hours",
        impact.annual_hours_saved
    );
    let _ = writeln!(
        out,
        "  Annual cost savings: ${:.0}",
        impact.annual_cost_savings
    );
    let _ = writeln!(
        out,
        "  FTE equivalency: {:.2} employees",
        impact.fte_equivalency
    );
}

fn render_recommendations(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(out, "\n{RULE}\n");
    let _ = writeln!(out, "RECOMMENDED ACTIONS:");
    for (i, recommendation) in analysis.recommendations.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", i + 1, recommendation.action);
        let _ = writeln!(out, "   Issue: {}", recommendation.issue);
        let _ = writeln!(out, "   Impact: {}", recommendation.expected_impact);
    }
}
