use crate::model::labs::LabSnapshot;
use crate::model::reasons::Reason;
use crate::model::scores::PartialScore;

/// Scores the lab panel. Missing values add nothing here; the bundle stage
/// decides what a missing lactate means.
pub fn score_labs(lab: &LabSnapshot) -> PartialScore {
    let mut points: f64 = 0.0;
    let mut reasons = Vec::new();

    if lab.lactate.is_some_and(|v| v >= 2.0) {
        points += 0.35;
        reasons.push(Reason::LactateHigh);
    }
    if lab.wbc.is_some_and(|v| v > 12.0 || v < 4.0) {
        points += 0.20;
        reasons.push(Reason::WbcAbnormal);
    }
    if lab.creatinine.is_some_and(|v| v >= 1.5) {
        points += 0.15;
        reasons.push(Reason::CreatinineHigh);
    }
    if lab.platelets.is_some_and(|v| v < 150.0) {
        points += 0.15;
        reasons.push(Reason::PlateletsLow);
    }
    if lab.bilirubin.is_some_and(|v| v >= 2.0) {
        points += 0.15;
        reasons.push(Reason::BilirubinHigh);
    }

    PartialScore {
        score: points.min(1.0),
        reasons,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_labs.rs"]
mod tests;
