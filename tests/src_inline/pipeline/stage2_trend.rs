use super::*;

fn stable() -> VitalsSnapshot {
    VitalsSnapshot::new(16.0, 124.0, 82.0, 36.8, 97.0)
}

#[test]
fn test_empty_trend_is_validation_error() {
    let err = score_vitals_trend(&[]).unwrap_err();
    assert!(matches!(err, RadarError::Validation(_)));
    assert!(err.to_string().contains("vitals_trend"));
}

#[test]
fn test_stable_trend_scores_zero() {
    let out = score_vitals_trend(&[stable(), stable()]).unwrap();
    assert_eq!(out.score, 0.0);
    assert!(out.reasons.is_empty());
}

#[test]
fn test_deteriorating_trend() {
    let trend = [
        VitalsSnapshot::new(18.0, 122.0, 95.0, 37.2, 96.0),
        VitalsSnapshot::new(24.0, 98.0, 118.0, 38.6, 93.0),
    ];
    let out = score_vitals_trend(&trend).unwrap();
    assert!((out.score - 0.9).abs() < 1e-9);
    assert_eq!(
        out.reasons,
        vec![
            Reason::RespRateHigh,
            Reason::HeartRateHigh,
            Reason::SystolicLow,
            Reason::TemperatureAbnormal,
            Reason::SystolicFalling,
            Reason::RespRateRising,
        ]
    );
}

#[test]
fn test_latest_thresholds_are_inclusive() {
    let latest = VitalsSnapshot::new(22.0, 100.0, 100.0, 38.0, 97.0);
    let out = score_vitals_trend(&[latest]).unwrap();
    assert!((out.score - 0.70).abs() < 1e-9);
}

#[test]
fn test_low_temperature_is_abnormal() {
    let out = score_vitals_trend(&[VitalsSnapshot::new(16.0, 124.0, 82.0, 35.9, 97.0)]).unwrap();
    assert_eq!(out.reasons, vec![Reason::TemperatureAbnormal]);
    let out = score_vitals_trend(&[VitalsSnapshot::new(16.0, 124.0, 82.0, 36.0, 97.0)]).unwrap();
    assert!(out.reasons.is_empty());
}

#[test]
fn test_deltas_compare_against_first_snapshot() {
    let first = VitalsSnapshot::new(14.0, 130.0, 80.0, 37.0, 97.0);
    let middle = VitalsSnapshot::new(20.0, 110.0, 80.0, 37.0, 97.0);
    let latest = VitalsSnapshot::new(19.0, 114.0, 80.0, 37.0, 97.0);
    let out = score_vitals_trend(&[first, middle, latest]).unwrap();
    assert_eq!(out.reasons, vec![Reason::SystolicFalling, Reason::RespRateRising]);
    assert!((out.score - 0.20).abs() < 1e-9);
}

#[test]
fn test_delta_boundaries_are_strict() {
    let first = VitalsSnapshot::new(16.0, 130.0, 80.0, 37.0, 97.0);
    let latest = VitalsSnapshot::new(20.0, 115.0, 80.0, 37.0, 97.0);
    let out = score_vitals_trend(&[first, latest]).unwrap();
    assert!(out.reasons.is_empty());
}

#[test]
fn test_mean_spo2_uses_whole_sequence() {
    let mut low = stable();
    low.spo2 = 90.0;
    let mut normal = stable();
    normal.spo2 = 97.0;
    // mean 93.5
    let out = score_vitals_trend(&[low, normal]).unwrap();
    assert_eq!(out.reasons, vec![Reason::MeanSpo2Low]);
    // mean 94.0 is not low
    let mut edge = stable();
    edge.spo2 = 91.0;
    let out = score_vitals_trend(&[edge, normal]).unwrap();
    assert!(out.reasons.is_empty());
}

#[test]
fn test_single_snapshot_has_no_deltas() {
    let v = VitalsSnapshot::new(30.0, 80.0, 140.0, 40.0, 85.0);
    let out = score_vitals_trend(&[v]).unwrap();
    assert!(!out.reasons.contains(&Reason::SystolicFalling));
    assert!(!out.reasons.contains(&Reason::RespRateRising));
    assert!((out.score - 0.80).abs() < 1e-9);
}
