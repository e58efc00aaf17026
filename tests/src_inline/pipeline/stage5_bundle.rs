use super::*;

fn with_lactate(lactate: Option<f64>) -> LabSnapshot {
    LabSnapshot {
        lactate,
        ..LabSnapshot::default()
    }
}

#[test]
fn test_not_triggered_continues_monitoring() {
    for lab in [with_lactate(None), with_lactate(Some(4.0))] {
        assert_eq!(
            recommend_bundle(false, &lab),
            vec![BundleAction::ContinueMonitoring]
        );
    }
}

#[test]
fn test_triggered_without_lactate_obtains_one() {
    let bundle = recommend_bundle(true, &with_lactate(None));
    assert_eq!(&bundle[..4], &CORE_BUNDLE[..]);
    assert_eq!(bundle.len(), 5);
    assert!(bundle.contains(&BundleAction::ObtainInitialLactate));
    assert!(!bundle.contains(&BundleAction::RepeatLactate));
}

#[test]
fn test_triggered_high_lactate_repeats() {
    let bundle = recommend_bundle(true, &with_lactate(Some(2.0)));
    assert_eq!(&bundle[..4], &CORE_BUNDLE[..]);
    assert_eq!(bundle[4], BundleAction::RepeatLactate);
    assert!(!bundle.contains(&BundleAction::ObtainInitialLactate));
}

#[test]
fn test_triggered_normal_lactate_core_only() {
    let bundle = recommend_bundle(true, &with_lactate(Some(1.9)));
    assert_eq!(bundle, CORE_BUNDLE.to_vec());
}

#[test]
fn test_bundle_strings() {
    assert_eq!(
        BundleAction::RepeatLactate.to_string(),
        "Repeat lactate in 2-4 hours"
    );
    assert!(
        BundleAction::ContinueMonitoring
            .as_str()
            .contains("reassess in 2-4 hours")
    );
}
