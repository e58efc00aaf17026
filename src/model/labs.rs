use serde::{Deserialize, Serialize};

/// Most recent lab panel. `None` means the value was not drawn, which is
/// distinct from a normal result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSnapshot {
    pub wbc: Option<f64>,
    pub lactate: Option<f64>,
    pub creatinine: Option<f64>,
    pub platelets: Option<f64>,
    pub bilirubin: Option<f64>,
}
