use crate::error::RadarError;
use crate::model::reasons::Reason;
use crate::model::scores::PartialScore;
use crate::model::vitals::VitalsSnapshot;

pub fn score_vitals_trend(trend: &[VitalsSnapshot]) -> Result<PartialScore, RadarError> {
    let (Some(first), Some(latest)) = (trend.first(), trend.last()) else {
        return Err(RadarError::empty_vitals_trend());
    };

    let mut points: f64 = 0.0;
    let mut reasons = Vec::new();

    if latest.rr >= 22.0 {
        points += 0.20;
        reasons.push(Reason::RespRateHigh);
    }
    if latest.hr >= 100.0 {
        points += 0.15;
        reasons.push(Reason::HeartRateHigh);
    }
    if latest.sbp <= 100.0 {
        points += 0.20;
        reasons.push(Reason::SystolicLow);
    }
    if latest.temp_c >= 38.0 || latest.temp_c < 36.0 {
        points += 0.15;
        reasons.push(Reason::TemperatureAbnormal);
    }

    // deltas against the oldest snapshot
    if latest.sbp < first.sbp - 15.0 {
        points += 0.10;
        reasons.push(Reason::SystolicFalling);
    }
    if latest.rr > first.rr + 4.0 {
        points += 0.10;
        reasons.push(Reason::RespRateRising);
    }

    if mean_spo2(trend) < 94.0 {
        points += 0.10;
        reasons.push(Reason::MeanSpo2Low);
    }

    Ok(PartialScore {
        score: points.min(1.0),
        reasons,
    })
}

fn mean_spo2(trend: &[VitalsSnapshot]) -> f64 {
    let sum: f64 = trend.iter().map(|v| v.spo2).sum();
    sum / trend.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_trend.rs"]
mod tests;
