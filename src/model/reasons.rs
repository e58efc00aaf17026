use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonCategory {
    Note,
    Trend,
    Lab,
    Conventional,
}

/// Categories in the order they appear in a result's reason list.
pub fn category_order() -> &'static [ReasonCategory] {
    &[
        ReasonCategory::Note,
        ReasonCategory::Trend,
        ReasonCategory::Lab,
        ReasonCategory::Conventional,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NoteSignal(&'static str),
    RespRateHigh,
    HeartRateHigh,
    SystolicLow,
    TemperatureAbnormal,
    SystolicFalling,
    RespRateRising,
    MeanSpo2Low,
    LactateHigh,
    WbcAbnormal,
    CreatinineHigh,
    PlateletsLow,
    BilirubinHigh,
    News2High(u8),
    QsofaHigh(u8),
}

impl Reason {
    pub fn category(&self) -> ReasonCategory {
        match self {
            Reason::NoteSignal(_) => ReasonCategory::Note,
            Reason::RespRateHigh
            | Reason::HeartRateHigh
            | Reason::SystolicLow
            | Reason::TemperatureAbnormal
            | Reason::SystolicFalling
            | Reason::RespRateRising
            | Reason::MeanSpo2Low => ReasonCategory::Trend,
            Reason::LactateHigh
            | Reason::WbcAbnormal
            | Reason::CreatinineHigh
            | Reason::PlateletsLow
            | Reason::BilirubinHigh => ReasonCategory::Lab,
            Reason::News2High(_) | Reason::QsofaHigh(_) => ReasonCategory::Conventional,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NoteSignal(term) => write!(f, "Note signal: '{term}'"),
            Reason::RespRateHigh => f.write_str("RR elevated"),
            Reason::HeartRateHigh => f.write_str("HR elevated"),
            Reason::SystolicLow => f.write_str("SBP low"),
            Reason::TemperatureAbnormal => f.write_str("Temperature abnormal"),
            Reason::SystolicFalling => f.write_str("SBP trending down"),
            Reason::RespRateRising => f.write_str("RR trending up"),
            Reason::MeanSpo2Low => f.write_str("Mean SpO2 low"),
            Reason::LactateHigh => f.write_str("Lactate elevated"),
            Reason::WbcAbnormal => f.write_str("WBC abnormal"),
            Reason::CreatinineHigh => f.write_str("Creatinine elevated"),
            Reason::PlateletsLow => f.write_str("Platelets low"),
            Reason::BilirubinHigh => f.write_str("Bilirubin elevated"),
            Reason::News2High(score) => write!(f, "NEWS2 high ({score})"),
            Reason::QsofaHigh(score) => write!(f, "qSOFA high ({score})"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
