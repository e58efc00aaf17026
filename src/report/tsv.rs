use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::{RecordOutcome, format_f64_3};

const HEADER: [&str; 12] = [
    "id",
    "risk_score",
    "triggered",
    "news2",
    "qsofa",
    "note_score",
    "trend_score",
    "lab_score",
    "conventional_score",
    "reasons",
    "bundle",
    "error",
];

pub fn write_results_tsv(outcomes: &[RecordOutcome], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", HEADER.join("\t"))?;
    for outcome in outcomes {
        writeln!(w, "{}", render_row(outcome))?;
    }
    w.flush()
}

fn render_row(outcome: &RecordOutcome) -> String {
    let id = sanitize(&outcome.id);
    match &outcome.result {
        Ok(r) => {
            let reasons = r
                .reasons
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            let bundle = r
                .recommended_bundle
                .iter()
                .map(|x| x.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            [
                id,
                format_f64_3(r.risk_score),
                r.triggered.to_string(),
                r.news2.to_string(),
                r.qsofa.to_string(),
                format_f64_3(r.breakdown.note),
                format_f64_3(r.breakdown.trend),
                format_f64_3(r.breakdown.lab),
                format_f64_3(r.breakdown.conventional),
                sanitize(&reasons),
                sanitize(&bundle),
                String::new(),
            ]
            .join("\t")
        }
        Err(err) => {
            let mut cols = vec![id];
            cols.extend(std::iter::repeat_n(String::new(), HEADER.len() - 2));
            cols.push(sanitize(&err.to_string()));
            cols.join("\t")
        }
    }
}

// tabs and newlines would break the column layout
fn sanitize(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}
