use serde::Serialize;

use crate::model::result::RadarResult;
use crate::report::{BatchSummary, RecordOutcome, ReportContext};

#[derive(Serialize)]
struct ResultsDocument<'a> {
    tool: &'a str,
    version: &'a str,
    threshold: f64,
    summary: &'a BatchSummary,
    records: Vec<RecordEntry<'a>>,
}

#[derive(Serialize)]
struct RecordEntry<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a RadarResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render_results_json(
    ctx: &ReportContext,
    summary: &BatchSummary,
    outcomes: &[RecordOutcome],
) -> Result<String, serde_json::Error> {
    let records = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(result) => RecordEntry {
                id: &outcome.id,
                result: Some(result),
                error: None,
            },
            Err(err) => RecordEntry {
                id: &outcome.id,
                result: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let doc = ResultsDocument {
        tool: &ctx.tool_name,
        version: &ctx.tool_version,
        threshold: ctx.threshold,
        summary,
        records,
    };
    serde_json::to_string_pretty(&doc)
}
