//! Stage transition extraction
//!
//! Walks each case's time-ordered events and emits one transition per
//! consecutive pair. Transitions never cross case boundaries.

use crate::event_log::EventLog;
use serde::Serialize;

/// Elapsed time between two consecutive events within one case
///
/// Priority and category are taken from the earlier event of the pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub from_stage: String,
    pub to_stage: String,
    /// Fractional hours, never negative
    pub duration_hours: f64,
    pub priority: String,
    pub category: String,
}

/// Extract all stage transitions from the log
///
/// A case with N events yields max(N - 1, 0) transitions; single-event
/// cases are silently skipped. Identical consecutive timestamps yield a
/// duration of 0.0, not an error.
pub fn extract_transitions(log: &EventLog) -> Vec<Transition> {
    let mut transitions = Vec::new();

    for case in log.cases() {
        for pair in case.events.windows(2) {
            let elapsed = pair[1].timestamp - pair[0].timestamp;
            let duration_hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;

            transitions.push(Transition {
                from_stage: pair[0].activity.clone(),
                to_stage: pair[1].activity.clone(),
                duration_hours,
                priority: pair[0].priority.clone(),
                category: pair[0].category.clone(),
            });
        }
    }

    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::Event;
    use chrono::NaiveDate;

    fn event(case_id: &str, activity: &str, hour_offset: i64) -> Event {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Event {
            case_id: case_id.to_string(),
            activity: activity.to_string(),
            timestamp: base + chrono::Duration::hours(hour_offset),
            priority: "High".to_string(),
            category: "Network".to_string(),
        }
    }

    #[test]
    fn test_documented_ticket_lifecycle() {
        // Opened at 0h, investigation at 5h, solution at 53h, closed at 125h
        let log = EventLog::from_events(vec![
            event("1", "Opened", 0),
            event("1", "Investigation Started", 5),
            event("1", "Solution Implemented", 53),
            event("1", "Closed", 125),
        ]);
        let transitions = extract_transitions(&log);

        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[0].from_stage, "Opened");
        assert_eq!(transitions[0].to_stage, "Investigation Started");
        assert_eq!(transitions[0].duration_hours, 5.0);
        assert_eq!(transitions[1].duration_hours, 48.0);
        assert_eq!(transitions[2].duration_hours, 72.0);
    }

    #[test]
    fn test_single_event_case_yields_nothing() {
        let log = EventLog::from_events(vec![event("1", "Opened", 0)]);
        assert!(extract_transitions(&log).is_empty());
    }

    #[test]
    fn test_no_transition_crosses_cases() {
        let log = EventLog::from_events(vec![
            event("1", "Opened", 0),
            event("1", "Closed", 2),
            event("2", "Opened", 1),
            event("2", "Closed", 4),
        ]);
        let transitions = extract_transitions(&log);

        assert_eq!(transitions.len(), 2);
        assert!(transitions
            .iter()
            .all(|t| t.from_stage == "Opened" && t.to_stage == "Closed"));
        assert_eq!(transitions[0].duration_hours, 2.0);
        assert_eq!(transitions[1].duration_hours, 3.0);
    }

    #[test]
    fn test_identical_timestamps_yield_zero_duration() {
        let log = EventLog::from_events(vec![
            event("1", "Opened", 3),
            event("1", "Auto-Assigned", 3),
        ]);
        let transitions = extract_transitions(&log);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].duration_hours, 0.0);
    }

    #[test]
    fn test_fractional_hours_not_rounded() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut first = event("1", "Opened", 0);
        first.timestamp = base;
        let mut second = event("1", "Closed", 0);
        second.timestamp = base + chrono::Duration::minutes(90);

        let log = EventLog::from_events(vec![first, second]);
        let transitions = extract_transitions(&log);
        assert!((transitions[0].duration_hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_priority_and_category_from_earlier_event() {
        let mut a = event("1", "Opened", 0);
        a.priority = "Critical".to_string();
        a.category = "Hardware".to_string();
        let b = event("1", "Closed", 1);

        let log = EventLog::from_events(vec![a, b]);
        let transitions = extract_transitions(&log);
        assert_eq!(transitions[0].priority, "Critical");
        assert_eq!(transitions[0].category, "Hardware");
    }
}
