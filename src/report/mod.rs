pub mod json;
pub mod text;
pub mod tsv;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::error::RadarError;
use crate::model::reasons::{Reason, ReasonCategory, category_order};
use crate::model::result::RadarResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    All,
    Json,
    Text,
    Tsv,
}

/// Evaluation outcome of one input record.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub id: String,
    pub result: Result<RadarResult, RadarError>,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub tool_name: String,
    pub tool_version: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub n_records: usize,
    pub n_evaluated: usize,
    pub n_failed: usize,
    pub n_triggered: usize,
    pub triggered_fraction: f64,
    pub risk_median: f64,
    pub risk_p90: f64,
    pub risk_max: f64,
    pub news2_high_fraction: f64,
    pub qsofa_high_fraction: f64,
    pub reasons_by_category: Vec<CategoryCount>,
}

pub fn build_summary(outcomes: &[RecordOutcome]) -> BatchSummary {
    let results = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .collect::<Vec<_>>();

    let risk = results.iter().map(|r| r.risk_score).collect::<Vec<_>>();
    let triggered = results.iter().map(|r| r.triggered).collect::<Vec<_>>();
    let news2_high = results
        .iter()
        .map(|r| r.reasons.iter().any(|x| matches!(x, Reason::News2High(_))))
        .collect::<Vec<_>>();
    let qsofa_high = results
        .iter()
        .map(|r| r.reasons.iter().any(|x| matches!(x, Reason::QsofaHigh(_))))
        .collect::<Vec<_>>();

    let reasons_by_category = category_order()
        .iter()
        .map(|category| CategoryCount {
            name: category_name(*category),
            count: results
                .iter()
                .flat_map(|r| r.reasons.iter())
                .filter(|reason| reason.category() == *category)
                .count(),
        })
        .collect();

    BatchSummary {
        n_records: outcomes.len(),
        n_evaluated: results.len(),
        n_failed: outcomes.len() - results.len(),
        n_triggered: triggered.iter().filter(|&&t| t).count(),
        triggered_fraction: bool_fraction(&triggered),
        risk_median: median(&risk),
        risk_p90: p90(&risk),
        risk_max: risk.iter().copied().fold(0.0, f64::max),
        news2_high_fraction: bool_fraction(&news2_high),
        qsofa_high_fraction: bool_fraction(&qsofa_high),
        reasons_by_category,
    }
}

/// Writes the requested reports into `out_dir` and returns the written paths.
pub fn write_reports(
    outcomes: &[RecordOutcome],
    ctx: &ReportContext,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let summary = build_summary(outcomes);
    let mut written = Vec::new();

    if matches!(format, ReportFormat::All | ReportFormat::Tsv) {
        let path = out_dir.join("radar.tsv");
        tsv::write_results_tsv(outcomes, &path)?;
        written.push(path);
    }

    if matches!(format, ReportFormat::All | ReportFormat::Json) {
        let path = out_dir.join("results.json");
        let json = json::render_results_json(ctx, &summary, outcomes)?;
        write_text(&path, &json)?;
        written.push(path);
    }

    if matches!(format, ReportFormat::All | ReportFormat::Text) {
        let path = out_dir.join("report.txt");
        let report = text::render_report_text(ctx, &summary, outcomes);
        write_text(&path, &report)?;
        written.push(path);
    }

    Ok(written)
}

pub fn category_name(category: ReasonCategory) -> &'static str {
    match category {
        ReasonCategory::Note => "note",
        ReasonCategory::Trend => "trend",
        ReasonCategory::Lab => "lab",
        ReasonCategory::Conventional => "conventional",
    }
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn bool_fraction(values: &[bool]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.iter().filter(|&&v| v).count();
    count as f64 / values.len() as f64
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
