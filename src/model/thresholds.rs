pub const DEFAULT_TRIGGER_THRESHOLD: f64 = 0.65;

/// Fixed aggregation constants for the composite risk score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    pub note_weight: f64,
    pub trend_weight: f64,
    pub lab_weight: f64,
    pub conventional_weight: f64,
    /// NEWS2 practical severity ceiling, not the theoretical max of 18.
    pub news2_ceiling: f64,
    pub qsofa_max: f64,
    pub news2_blend: f64,
    pub qsofa_blend: f64,
    pub news2_flag_min: u8,
    pub qsofa_flag_min: u8,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            note_weight: 0.35,
            trend_weight: 0.30,
            lab_weight: 0.20,
            conventional_weight: 0.15,
            news2_ceiling: 12.0,
            qsofa_max: 3.0,
            news2_blend: 0.6,
            qsofa_blend: 0.4,
            news2_flag_min: 5,
            qsofa_flag_min: 2,
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
