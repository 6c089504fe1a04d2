//! JSON output format for the analysis report

use crate::analysis::Analysis;
use serde::Serialize;

/// Envelope around the serialized analysis
#[derive(Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

/// Render the full analysis as a pretty-printed JSON document
pub fn render(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        tool: "embudo",
        version: env!("CARGO_PKG_VERSION"),
        analysis,
    })
}
