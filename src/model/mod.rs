pub mod bundle;
pub mod labs;
pub mod reasons;
pub mod record;
pub mod result;
pub mod scores;
pub mod thresholds;
pub mod vitals;
