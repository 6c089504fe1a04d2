//! Segmentation: priority cross-tab and per-case resolution times

use crate::event_log::EventLog;
use crate::transition::Transition;
use serde::Serialize;
use std::collections::HashMap;

/// Mean and observation count for one (stage, priority) cell
///
/// The count distinguishes "no observed transitions" from a true
/// zero-duration mean; zero-fill happens only at presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossTabCell {
    pub mean_hours: f64,
    pub count: usize,
}

/// One cross-tab row: a stage and its per-priority cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTabRow {
    pub from_stage: String,
    /// One entry per column in `PriorityCrossTab::priorities`; None where no
    /// transition of that priority left this stage
    pub cells: Vec<Option<CrossTabCell>>,
}

/// Mean transition duration by (from_stage, priority)
///
/// Rows follow stage first-appearance order, columns priority
/// first-appearance order, both taken from the transition stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriorityCrossTab {
    pub priorities: Vec<String>,
    pub rows: Vec<CrossTabRow>,
}

impl PriorityCrossTab {
    /// Presentation value for a cell: the mean, or 0.0 when unobserved
    pub fn mean_or_zero(&self, row: usize, column: usize) -> f64 {
        self.rows[row].cells[column]
            .map(|cell| cell.mean_hours)
            .unwrap_or(0.0)
    }
}

/// Cross-tabulate transition durations by stage and priority
pub fn priority_cross_tab(transitions: &[Transition]) -> PriorityCrossTab {
    let mut stage_index: HashMap<&str, usize> = HashMap::new();
    let mut stages: Vec<&str> = Vec::new();
    let mut priority_index: HashMap<&str, usize> = HashMap::new();
    let mut priorities: Vec<&str> = Vec::new();
    // (sum, count) per (stage, priority)
    let mut sums: HashMap<(usize, usize), (f64, usize)> = HashMap::new();

    for transition in transitions {
        let row = *stage_index
            .entry(transition.from_stage.as_str())
            .or_insert_with(|| {
                stages.push(&transition.from_stage);
                stages.len() - 1
            });
        let column = *priority_index
            .entry(transition.priority.as_str())
            .or_insert_with(|| {
                priorities.push(&transition.priority);
                priorities.len() - 1
            });
        let entry = sums.entry((row, column)).or_insert((0.0, 0));
        entry.0 += transition.duration_hours;
        entry.1 += 1;
    }

    let rows = stages
        .iter()
        .enumerate()
        .map(|(row, stage)| CrossTabRow {
            from_stage: stage.to_string(),
            cells: (0..priorities.len())
                .map(|column| {
                    sums.get(&(row, column)).map(|&(sum, count)| CrossTabCell {
                        mean_hours: sum / count as f64,
                        count,
                    })
                })
                .collect(),
        })
        .collect();

    PriorityCrossTab {
        priorities: priorities.iter().map(|p| p.to_string()).collect(),
        rows,
    }
}

/// End-to-end resolution time for one ticket
///
/// Priority and category come from the chronologically first event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionRecord {
    pub case_id: String,
    pub total_hours: f64,
    pub priority: String,
    pub category: String,
}

/// Compute per-case resolution records
///
/// Single-event cases yield a record with total_hours = 0.0.
pub fn resolution_records(log: &EventLog) -> Vec<ResolutionRecord> {
    log.cases()
        .iter()
        .map(|case| {
            let first = case.first_event();
            let last = case.last_event();
            let elapsed = last.timestamp - first.timestamp;
            ResolutionRecord {
                case_id: case.case_id.clone(),
                total_hours: elapsed.num_milliseconds() as f64 / 3_600_000.0,
                priority: first.priority.clone(),
                category: first.category.clone(),
            }
        })
        .collect()
}

/// Mean resolution time for one ticket category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub avg_hours: f64,
    pub count: usize,
}

/// Group resolution records by category and average
///
/// Sorted by descending mean, stable on category first appearance.
pub fn resolution_by_category(records: &[ResolutionRecord]) -> Vec<CategorySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();

    for record in records {
        match index.get(record.category.as_str()) {
            Some(&i) => {
                groups[i].1 += record.total_hours;
                groups[i].2 += 1;
            }
            None => {
                index.insert(record.category.as_str(), groups.len());
                groups.push((record.category.as_str(), record.total_hours, 1));
            }
        }
    }

    let mut summaries: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, sum, count)| CategorySummary {
            category: category.to_string(),
            avg_hours: sum / count as f64,
            count,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.avg_hours
            .partial_cmp(&a.avg_hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    summaries
}
