use serde::{Deserialize, Serialize};

use crate::model::labs::LabSnapshot;
use crate::model::vitals::VitalsSnapshot;

/// One patient's inputs to a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub note: String,
    pub vitals_trend: Vec<VitalsSnapshot>,
    #[serde(default)]
    pub lab: LabSnapshot,
}

impl PatientRecord {
    pub fn new(note: impl Into<String>, vitals_trend: Vec<VitalsSnapshot>, lab: LabSnapshot) -> Self {
        Self {
            id: None,
            note: note.into(),
            vitals_trend,
            lab,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Record id, or `record_<index>` when the input carried none.
    pub fn display_id(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("record_{index}"),
        }
    }
}
