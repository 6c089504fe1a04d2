//! Cycle time aggregation per originating stage

use crate::transition::Transition;
use serde::Serialize;
use std::collections::HashMap;

/// Summary statistics for transitions leaving one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSummary {
    pub from_stage: String,
    /// Mean outgoing transition duration
    pub avg_hours: f64,
    /// Midpoint of the two central values for even-sized groups
    pub median_hours: f64,
    /// Sample standard deviation; None for a single observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_hours: Option<f64>,
    pub count: usize,
}

/// Group transitions by originating stage and summarize each group.
///
/// Output is sorted by descending mean duration with a stable tie-break on
/// the stage's first appearance in the transition stream. Downstream top-N
/// selection relies on this ordering.
pub fn summarize_stages(transitions: &[Transition]) -> Vec<StageSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();

    for transition in transitions {
        match index.get(transition.from_stage.as_str()) {
            Some(&i) => groups[i].1.push(transition.duration_hours),
            None => {
                index.insert(transition.from_stage.as_str(), groups.len());
                groups.push((transition.from_stage.as_str(), vec![transition.duration_hours]));
            }
        }
    }

    let mut summaries: Vec<StageSummary> = groups
        .into_iter()
        .map(|(stage, durations)| StageSummary {
            from_stage: stage.to_string(),
            avg_hours: mean(&durations),
            median_hours: median(&durations),
            std_hours: sample_std(&durations),
            count: durations.len(),
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.avg_hours
            .partial_cmp(&a.avg_hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    summaries
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n - 1 divisor); undefined for one observation
fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}
