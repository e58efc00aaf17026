use crate::error::RadarError;
use crate::model::labs::LabSnapshot;
use crate::model::reasons::Reason;
use crate::model::record::PatientRecord;
use crate::model::result::{RadarResult, ScoreBreakdown};
use crate::model::scores::{clip01, round3};
use crate::model::thresholds::{DEFAULT_TRIGGER_THRESHOLD, ScoringProfile};
use crate::model::vitals::VitalsSnapshot;
use crate::pipeline::stage1_note::score_note;
use crate::pipeline::stage2_trend::score_vitals_trend;
use crate::pipeline::stage3_labs::score_labs;
use crate::pipeline::stage4_conventional::{calculate_news2, calculate_qsofa, conventional_score};
use crate::pipeline::stage5_bundle::recommend_bundle;

/// Composite sepsis risk aggregator.
///
/// Holds only the trigger threshold and the fixed scoring constants; every
/// `evaluate` call is independent, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlySepsisRadar {
    threshold: f64,
    profile: ScoringProfile,
}

impl EarlySepsisRadar {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            profile: ScoringProfile::default_v1(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores one patient.
    ///
    /// `triggered` is decided on the reported, 3-decimal `risk_score`, so
    /// `triggered == (risk_score >= threshold)` always holds. A raw total just
    /// under the threshold that rounds up to it (0.6499999999999999 at 0.65)
    /// therefore triggers.
    ///
    /// Fails with [`RadarError::Validation`] when `vitals_trend` is empty.
    pub fn evaluate(
        &self,
        note: &str,
        vitals_trend: &[VitalsSnapshot],
        latest_lab: &LabSnapshot,
    ) -> Result<RadarResult, RadarError> {
        let Some(latest_vitals) = vitals_trend.last() else {
            return Err(RadarError::empty_vitals_trend());
        };

        let note_part = score_note(note);
        let trend_part = score_vitals_trend(vitals_trend)?;
        let lab_part = score_labs(latest_lab);

        let news2 = calculate_news2(latest_vitals);
        let qsofa = calculate_qsofa(latest_vitals);
        let conventional = conventional_score(news2, qsofa, &self.profile);

        let p = &self.profile;
        let total = clip01(
            p.note_weight * note_part.score
                + p.trend_weight * trend_part.score
                + p.lab_weight * lab_part.score
                + p.conventional_weight * conventional,
        );

        let mut reasons: Vec<Reason> = Vec::with_capacity(
            note_part.reasons.len() + trend_part.reasons.len() + lab_part.reasons.len() + 2,
        );
        reasons.extend(note_part.reasons);
        reasons.extend(trend_part.reasons);
        reasons.extend(lab_part.reasons);
        if news2 >= p.news2_flag_min {
            reasons.push(Reason::News2High(news2));
        }
        if qsofa >= p.qsofa_flag_min {
            reasons.push(Reason::QsofaHigh(qsofa));
        }

        let risk_score = round3(total);
        let triggered = risk_score >= self.threshold;
        let recommended_bundle = recommend_bundle(triggered, latest_lab);

        tracing::debug!(
            risk_score,
            triggered,
            news2,
            qsofa,
            n_reasons = reasons.len(),
            "sepsis radar evaluated"
        );

        Ok(RadarResult {
            risk_score,
            triggered,
            reasons,
            recommended_bundle,
            news2,
            qsofa,
            breakdown: ScoreBreakdown {
                note: note_part.score,
                trend: trend_part.score,
                lab: lab_part.score,
                conventional,
            },
        })
    }

    pub fn evaluate_record(&self, record: &PatientRecord) -> Result<RadarResult, RadarError> {
        self.evaluate(&record.note, &record.vitals_trend, &record.lab)
    }
}

impl Default for EarlySepsisRadar {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_THRESHOLD)
    }
}

/// Evaluates records in order and stops at the first failure.
pub fn evaluate_many<'a, I>(
    radar: &EarlySepsisRadar,
    records: I,
) -> Result<Vec<RadarResult>, RadarError>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    records
        .into_iter()
        .map(|record| radar.evaluate_record(record))
        .collect()
}

/// Evaluates every record, keeping each record's outcome separate.
pub fn evaluate_each<'a, I>(
    radar: &EarlySepsisRadar,
    records: I,
) -> Vec<Result<RadarResult, RadarError>>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    records
        .into_iter()
        .map(|record| radar.evaluate_record(record))
        .collect()
}

#[cfg(test)]
#[path = "../tests/src_inline/radar.rs"]
mod tests;
