use crate::model::thresholds::ScoringProfile;
use crate::model::vitals::VitalsSnapshot;

/// NEWS2 over one snapshot, in [0, 18].
///
/// Each parameter takes the points of the first band it falls in. Band edges
/// are inclusive and compared literally, so a reading between two bands (RR
/// 20.5, temperature 35.05) scores nothing. Temperatures 36.1 to 39.0 score 0.
pub fn calculate_news2(vitals: &VitalsSnapshot) -> u8 {
    respiration_points(vitals.rr)
        + systolic_points(vitals.sbp)
        + heart_rate_points(vitals.hr)
        + temperature_points(vitals.temp_c)
        + spo2_points(vitals.spo2)
        + if vitals.altered_mental_status { 3 } else { 0 }
}

/// qSOFA over one snapshot, in [0, 3].
pub fn calculate_qsofa(vitals: &VitalsSnapshot) -> u8 {
    let mut score = 0;
    if vitals.rr >= 22.0 {
        score += 1;
    }
    if vitals.sbp <= 100.0 {
        score += 1;
    }
    if vitals.altered_mental_status {
        score += 1;
    }
    score
}

/// Blend of NEWS2 and qSOFA, each normalized to its ceiling, capped at 1.
pub fn conventional_score(news2: u8, qsofa: u8, profile: &ScoringProfile) -> f64 {
    let news2_part = f64::from(news2) / profile.news2_ceiling * profile.news2_blend;
    let qsofa_part = f64::from(qsofa) / profile.qsofa_max * profile.qsofa_blend;
    (news2_part + qsofa_part).min(1.0)
}

fn respiration_points(rr: f64) -> u8 {
    if rr <= 8.0 || rr >= 25.0 {
        3
    } else if (21.0..=24.0).contains(&rr) {
        2
    } else {
        0
    }
}

fn systolic_points(sbp: f64) -> u8 {
    if sbp <= 90.0 || sbp >= 220.0 {
        3
    } else if (91.0..=100.0).contains(&sbp) {
        2
    } else if (101.0..=110.0).contains(&sbp) {
        1
    } else {
        0
    }
}

fn heart_rate_points(hr: f64) -> u8 {
    if hr <= 40.0 || hr >= 131.0 {
        3
    } else if (111.0..=130.0).contains(&hr) {
        2
    } else if (91.0..=110.0).contains(&hr) {
        1
    } else {
        0
    }
}

fn temperature_points(temp_c: f64) -> u8 {
    if temp_c <= 35.0 {
        3
    } else if (35.1..=36.0).contains(&temp_c) || temp_c >= 39.1 {
        1
    } else {
        0
    }
}

fn spo2_points(spo2: f64) -> u8 {
    if spo2 <= 91.0 {
        3
    } else if (92.0..=93.0).contains(&spo2) {
        2
    } else if (94.0..=95.0).contains(&spo2) {
        1
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_conventional.rs"]
mod tests;
