//! Embudo - process bottleneck analysis for IT helpdesk event logs
//!
//! This library computes descriptive process-mining statistics over a
//! ticket event log: per-stage transition durations, bottleneck
//! identification with severity tiers, priority/category segmentation, a
//! financial impact projection, and rule-based improvement recommendations.

pub mod analysis;
pub mod bottleneck;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod cycle_time;
pub mod event_log;
pub mod impact;
pub mod json_output;
pub mod recommend;
pub mod report;
pub mod segmentation;
pub mod transition;
