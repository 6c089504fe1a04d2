//! CSV export of the analysis result tables
//!
//! Three flat files with header rows: stage summary, per-case resolution
//! times, and recommendations. Numeric fields are rendered with two
//! decimals for display; full precision stays internal to the pipeline.

use crate::analysis::Analysis;
use crate::cycle_time::StageSummary;
use crate::recommend::Recommendation;
use crate::segmentation::ResolutionRecord;
use std::io;
use std::path::Path;

pub const STAGE_SUMMARY_FILE: &str = "stage_summary.csv";
pub const RESOLUTION_FILE: &str = "resolution_summary.csv";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.csv";

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_row(fields: &[String]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    escaped.join(",")
}

/// Render the stage summary table
///
/// A single-observation group has no defined standard deviation and
/// serializes as an empty field, never as 0.
pub fn stage_summary_csv(summaries: &[StageSummary]) -> String {
    let mut output = String::from("From_Stage,Avg_Hours,Median_Hours,Std_Hours,Count\n");
    for summary in summaries {
        let std_field = summary
            .std_hours
            .map(|s| format!("{s:.2}"))
            .unwrap_or_default();
        output.push_str(&format_row(&[
            summary.from_stage.clone(),
            format!("{:.2}", summary.avg_hours),
            format!("{:.2}", summary.median_hours),
            std_field,
            summary.count.to_string(),
        ]));
        output.push('\n');
    }
    output
}

/// Render the per-case resolution table
pub fn resolution_csv(records: &[ResolutionRecord]) -> String {
    let mut output = String::from("Case_ID,Total_Hours,Priority,Category\n");
    for record in records {
        output.push_str(&format_row(&[
            record.case_id.clone(),
            format!("{:.2}", record.total_hours),
            record.priority.clone(),
            record.category.clone(),
        ]));
        output.push('\n');
    }
    output
}

/// Render the recommendation list
pub fn recommendations_csv(recommendations: &[Recommendation]) -> String {
    let mut output = String::from("Issue,Action,Expected_Impact\n");
    for recommendation in recommendations {
        output.push_str(&format_row(&[
            recommendation.issue.clone(),
            recommendation.action.clone(),
            recommendation.expected_impact.clone(),
        ]));
        output.push('\n');
    }
    output
}

/// Write the three export files into `dir`, creating it if needed
pub fn write_exports(dir: &Path, analysis: &Analysis) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(
        dir.join(STAGE_SUMMARY_FILE),
        stage_summary_csv(&analysis.stage_summary),
    )?;
    std::fs::write(
        dir.join(RESOLUTION_FILE),
        resolution_csv(&analysis.resolution_records),
    )?;
    std::fs::write(
        dir.join(RECOMMENDATIONS_FILE),
        recommendations_csv(&analysis.recommendations),
    )?;
    Ok(())
}
