use serde::Serialize;

use crate::model::bundle::BundleAction;
use crate::model::reasons::Reason;

/// Partial scores feeding the composite, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub note: f64,
    pub trend: f64,
    pub lab: f64,
    pub conventional: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarResult {
    pub risk_score: f64,
    pub triggered: bool,
    pub reasons: Vec<Reason>,
    pub recommended_bundle: Vec<BundleAction>,
    pub news2: u8,
    pub qsofa: u8,
    pub breakdown: ScoreBreakdown,
}

impl RadarResult {
    pub fn reason_strings(&self) -> Vec<String> {
        self.reasons.iter().map(|r| r.to_string()).collect()
    }

    pub fn has_reason(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }
}
