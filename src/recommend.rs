//! Rule-based process improvement recommendations
//!
//! A static lookup keyed on bottleneck presence, not a scored ranking.
//! Extending it means adding another (stage name, recommendation) pair.

use crate::bottleneck::Bottleneck;
use serde::Serialize;

/// Stage whose bottleneck indicates slow customer responses
pub const INVESTIGATION_STAGE: &str = "Investigation Started";
/// Stage whose bottleneck indicates slow solution verification
pub const VERIFICATION_STAGE: &str = "Solution Implemented";

/// A recommended process improvement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub issue: String,
    pub action: String,
    pub expected_impact: String,
}

impl Recommendation {
    fn new(issue: &str, action: &str, expected_impact: &str) -> Self {
        Self {
            issue: issue.to_string(),
            action: action.to_string(),
            expected_impact: expected_impact.to_string(),
        }
    }
}

/// Generate recommendations from the detected bottleneck set.
///
/// Output order is fixed: the two stage-conditional entries (when their
/// stage is a bottleneck), then two unconditional entries.
pub fn generate_recommendations(bottlenecks: &[Bottleneck]) -> Vec<Recommendation> {
    let is_bottleneck =
        |stage: &str| bottlenecks.iter().any(|b| b.summary.from_stage == stage);

    let mut recommendations = Vec::new();

    if is_bottleneck(INVESTIGATION_STAGE) {
        recommendations.push(Recommendation::new(
            "Long wait times for customer responses",
            "Implement automated reminder system for tickets waiting >48 hours",
            "20-30% reduction in customer response wait time",
        ));
    }

    if is_bottleneck(VERIFICATION_STAGE) {
        recommendations.push(Recommendation::new(
            "Delays in customer verification of solutions",
            "Create self-service verification portal with auto-close after 72 hours",
            "25% reduction in verification cycle time",
        ));
    }

    recommendations.push(Recommendation::new(
        "Critical priority tickets experiencing same delays as low priority",
        "Dedicate resources for critical/high priority tickets with <4 hour SLA",
        "40% improvement in critical ticket resolution time",
    ));

    recommendations.push(Recommendation::new(
        "Repetitive investigation work for similar issues",
        "Build searchable knowledge base with solution templates",
        "15-20% reduction in investigation time",
    ));

    recommendations
}
