//! Pipeline orchestration
//!
//! Runs the full analysis over a loaded event log: transitions, stage
//! summaries, bottlenecks, segmentation, impact projection, and
//! recommendations. Every step is a pure function over immutable input;
//! once the log is loaded the pipeline cannot fail.

use crate::bottleneck::{self, Bottleneck};
use crate::config::AnalysisConfig;
use crate::cycle_time::{self, StageSummary};
use crate::event_log::EventLog;
use crate::impact::{self, ImpactEstimate};
use crate::recommend::{self, Recommendation};
use crate::segmentation::{self, CategorySummary, PriorityCrossTab, ResolutionRecord};
use crate::transition::{self, Transition};
use serde::Serialize;

/// Everything the pipeline derives from one event log
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub event_count: usize,
    pub case_count: usize,
    pub stage_summary: Vec<StageSummary>,
    pub bottlenecks: Vec<Bottleneck>,
    pub priority_cross_tab: PriorityCrossTab,
    pub resolution_records: Vec<ResolutionRecord>,
    pub resolution_by_category: Vec<CategorySummary>,
    pub impact: ImpactEstimate,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip)]
    pub transitions: Vec<Transition>,
}

/// Run the full pipeline
pub fn run(log: &EventLog, config: &AnalysisConfig) -> Analysis {
    let transitions = transition::extract_transitions(log);
    tracing::debug!(transitions = transitions.len(), "extracted stage transitions");

    let stage_summary = cycle_time::summarize_stages(&transitions);
    let bottlenecks = bottleneck::classify_bottlenecks(&stage_summary, config);
    tracing::debug!(
        stages = stage_summary.len(),
        bottlenecks = bottlenecks.len(),
        "classified stages"
    );

    let priority_cross_tab = segmentation::priority_cross_tab(&transitions);
    let resolution_records = segmentation::resolution_records(log);
    let resolution_by_category = segmentation::resolution_by_category(&resolution_records);

    let impact = impact::estimate_impact(&stage_summary, config);
    let recommendations = recommend::generate_recommendations(&bottlenecks);

    Analysis {
        event_count: log.event_count(),
        case_count: log.case_count(),
        stage_summary,
        bottlenecks,
        priority_cross_tab,
        resolution_records,
        resolution_by_category,
        impact,
        recommendations,
        transitions,
    }
}
