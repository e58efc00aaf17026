use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::record::PatientRecord;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads a JSON array of patient records.
///
/// Records with an empty vitals trend are kept; rejecting them is the
/// radar's job so batch semantics stay in one place.
pub fn load_records(path: &Path) -> Result<Vec<PatientRecord>, InputError> {
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;

    if records.is_empty() {
        tracing::warn!("{} contains no records", path.display());
    }
    tracing::info!(
        "loaded {} patient records from {}",
        records.len(),
        path.display()
    );
    for (idx, record) in records.iter().enumerate() {
        if record.vitals_trend.is_empty() {
            tracing::warn!(
                "{} has no vitals snapshots and will fail validation",
                record.display_id(idx)
            );
        }
    }

    Ok(records)
}

/// Parses a JSON array of records. An empty array is a valid, empty batch.
pub fn parse_records(content: &str) -> Result<Vec<PatientRecord>, InputError> {
    let records: Vec<PatientRecord> = serde_json::from_str(content)?;
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
