use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleAction {
    ContinueMonitoring,
    BloodCultures,
    EmpiricAntibiotics,
    FluidResuscitation,
    MonitorPerfusion,
    ObtainInitialLactate,
    RepeatLactate,
}

/// Issued in this order whenever the radar triggers.
pub const CORE_BUNDLE: [BundleAction; 4] = [
    BundleAction::BloodCultures,
    BundleAction::EmpiricAntibiotics,
    BundleAction::FluidResuscitation,
    BundleAction::MonitorPerfusion,
];

impl BundleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleAction::ContinueMonitoring => {
                "Continue clinical monitoring and reassess in 2-4 hours"
            }
            BundleAction::BloodCultures => {
                "Draw blood cultures before antibiotics (if this does not delay therapy)"
            }
            BundleAction::EmpiricAntibiotics => {
                "Start empiric antibiotics per local guideline as soon as possible"
            }
            BundleAction::FluidResuscitation => {
                "Fluid resuscitation per clinical/hemodynamic assessment"
            }
            BundleAction::MonitorPerfusion => "Monitor urine output and perfusion",
            BundleAction::ObtainInitialLactate => "Obtain initial lactate",
            BundleAction::RepeatLactate => "Repeat lactate in 2-4 hours",
        }
    }
}

impl fmt::Display for BundleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BundleAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
