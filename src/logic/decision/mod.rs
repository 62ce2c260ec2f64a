//! Decision Module - Raw Model Output to Labeled Predictions
//!
//! Pure policies: no model access, no I/O. Thresholds and the class-label
//! contract live in `rules.rs`.

pub mod binary;
pub mod multiclass;
pub mod rules;

pub use rules::{DecisionConfig, FAILURE_TYPE_LABELS};

/// Round to the 4 decimal digits used in responses.
/// Internal computation keeps full precision; only surfaced values round.
pub(crate) fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_456), 0.1235);
        assert_eq!(round4(0.05), 0.05);
        assert_eq!(round4(1.0), 1.0);
    }
}
