use crate::model::reasons::Reason;

/// Output of one sub-scorer: a score in [0, 1] plus the reasons that fired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialScore {
    pub score: f64,
    pub reasons: Vec<Reason>,
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Rounds the exact binary value of `x` to 3 decimals. Scaling by 1000 first
/// would round the product and can lift a value sitting just under a
/// half-way point (0.0224999...) over it.
pub fn round3(x: f64) -> f64 {
    format!("{x:.3}").parse().unwrap_or(x)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
