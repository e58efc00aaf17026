use crate::model::bundle::{BundleAction, CORE_BUNDLE};
use crate::model::labs::LabSnapshot;

pub fn recommend_bundle(triggered: bool, lab: &LabSnapshot) -> Vec<BundleAction> {
    if !triggered {
        return vec![BundleAction::ContinueMonitoring];
    }

    let mut bundle = CORE_BUNDLE.to_vec();
    match lab.lactate {
        None => bundle.push(BundleAction::ObtainInitialLactate),
        Some(lactate) if lactate >= 2.0 => bundle.push(BundleAction::RepeatLactate),
        Some(_) => {}
    }
    bundle
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_bundle.rs"]
mod tests;
