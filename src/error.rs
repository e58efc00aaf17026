use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadarError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl RadarError {
    pub fn empty_vitals_trend() -> Self {
        RadarError::Validation("vitals_trend must contain at least one snapshot".to_string())
    }
}
