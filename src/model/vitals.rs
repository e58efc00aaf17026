use serde::{Deserialize, Serialize};

/// A single bedside observation.
///
/// Units: breaths/min, mmHg, bpm, degrees Celsius, percent. Values are never
/// range-checked; out-of-range readings are scored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalsSnapshot {
    pub rr: f64,
    pub sbp: f64,
    pub hr: f64,
    pub temp_c: f64,
    pub spo2: f64,
    #[serde(default, alias = "mental_status_altered")]
    pub altered_mental_status: bool,
}

impl VitalsSnapshot {
    pub fn new(rr: f64, sbp: f64, hr: f64, temp_c: f64, spo2: f64) -> Self {
        Self {
            rr,
            sbp,
            hr,
            temp_c,
            spo2,
            altered_mental_status: false,
        }
    }

    pub fn with_altered_mental_status(mut self, altered: bool) -> Self {
        self.altered_mental_status = altered;
        self
    }
}
