//! Early-warning sepsis radar.
//!
//! Scores a progress note, a vitals trend and the latest lab panel into a
//! bounded composite risk, alongside NEWS2 and qSOFA, and recommends a care
//! bundle once the risk crosses the configured threshold.

pub mod error;
pub mod input;
pub mod keywords;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod radar;
pub mod report;

pub use error::RadarError;
pub use model::bundle::BundleAction;
pub use model::labs::LabSnapshot;
pub use model::reasons::Reason;
pub use model::record::PatientRecord;
pub use model::result::{RadarResult, ScoreBreakdown};
pub use model::vitals::VitalsSnapshot;
pub use pipeline::stage4_conventional::{calculate_news2, calculate_qsofa};
pub use radar::{EarlySepsisRadar, evaluate_each, evaluate_many};
