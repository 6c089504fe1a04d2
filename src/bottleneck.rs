//! Bottleneck classification with severity tiers

use crate::config::AnalysisConfig;
use crate::cycle_time::StageSummary;
use serde::Serialize;
use std::fmt;

/// Severity classification for a bottleneck stage
///
/// Bins are left-open, right-closed over the mean duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// (0, moderate_max] hours
    Moderate,
    /// (moderate_max, high_max] hours
    High,
    /// (high_max, ∞) hours
    Critical,
}

impl Severity {
    fn classify(avg_hours: f64, config: &AnalysisConfig) -> Self {
        if avg_hours <= config.moderate_max_hours {
            Severity::Moderate
        } else if avg_hours <= config.high_max_hours {
            Severity::High
        } else {
            Severity::Critical
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Moderate => "MODERATE",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{label}")
    }
}

/// A stage whose mean outgoing duration exceeds the configured threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bottleneck {
    #[serde(flatten)]
    pub summary: StageSummary,
    pub severity: Severity,
}

/// Filter the stage summaries down to bottlenecks and tag each with a tier.
///
/// The filter is strict: a stage at exactly the threshold is excluded.
/// Input ordering (descending mean) is preserved.
pub fn classify_bottlenecks(
    summaries: &[StageSummary],
    config: &AnalysisConfig,
) -> Vec<Bottleneck> {
    summaries
        .iter()
        .filter(|s| s.avg_hours > config.bottleneck_threshold_hours)
        .map(|s| Bottleneck {
            summary: s.clone(),
            severity: Severity::classify(s.avg_hours, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(stage: &str, avg: f64) -> StageSummary {
        StageSummary {
            from_stage: stage.to_string(),
            avg_hours: avg,
            median_hours: avg,
            std_hours: None,
            count: 1,
        }
    }

    fn classify(avg: f64) -> Vec<Bottleneck> {
        classify_bottlenecks(&[summary("S", avg)], &AnalysisConfig::default())
    }

    #[test]
    fn test_threshold_filter_is_strict() {
        assert!(classify(20.0).is_empty());
        assert_eq!(classify(20.1).len(), 1);
        assert!(classify(5.0).is_empty());
    }

    #[test]
    fn test_severity_bins_right_closed() {
        // Exact bin edges fall in the lower tier
        assert_eq!(classify(30.0)[0].severity, Severity::Moderate);
        assert_eq!(classify(40.0)[0].severity, Severity::High);
    }

    #[test]
    fn test_severity_tiers() {
        assert_eq!(classify(25.0)[0].severity, Severity::Moderate);
        assert_eq!(classify(35.0)[0].severity, Severity::High);
        assert_eq!(classify(40.5)[0].severity, Severity::Critical);
        assert_eq!(classify(120.0)[0].severity, Severity::Critical);
    }

    #[test]
    fn test_ordering_preserved() {
        let summaries = vec![summary("A", 50.0), summary("B", 35.0), summary("C", 10.0)];
        let bottlenecks = classify_bottlenecks(&summaries, &AnalysisConfig::default());
        let stages: Vec<_> = bottlenecks
            .iter()
            .map(|b| b.summary.from_stage.as_str())
            .collect();
        assert_eq!(stages, vec!["A", "B"]);
    }

    #[test]
    fn test_custom_threshold_and_bins() {
        let config = AnalysisConfig {
            bottleneck_threshold_hours: 5.0,
            moderate_max_hours: 8.0,
            high_max_hours: 12.0,
            ..AnalysisConfig::default()
        };
        let bottlenecks = classify_bottlenecks(&[summary("S", 10.0)], &config);
        assert_eq!(bottlenecks[0].severity, Severity::High);
    }

    #[test]
    fn test_no_bottlenecks_is_valid() {
        let summaries = vec![summary("A", 1.0), summary("B", 2.0)];
        assert!(classify_bottlenecks(&summaries, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Moderate.to_string(), "MODERATE");
        assert_eq!(Severity::High.to_string(), "HIGH");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }
}
