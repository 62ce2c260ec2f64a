//! Binary Decision Policy
//!
//! Turns the binary detector's raw failure probability into a labeled
//! prediction with confidence.

use crate::models::{BinaryPrediction, MachineObservation};

use super::round4;
use super::rules::DecisionConfig;

/// Decide failed / not failed from the raw failure probability.
///
/// The threshold is 0.05, not 0.5 (see `rules::BINARY_FAILURE_THRESHOLD`).
/// Confidence is the probability mass of whichever label was chosen.
pub fn decide(
    failure_probability: f32,
    observation: &MachineObservation,
    config: &DecisionConfig,
) -> BinaryPrediction {
    let prediction: u8 = if failure_probability >= config.binary_threshold {
        1
    } else {
        0
    };

    let prediction_label = if prediction == 1 { "failed" } else { "not failed" };

    let confidence = if prediction == 1 {
        failure_probability
    } else {
        1.0 - failure_probability
    };

    BinaryPrediction {
        prediction,
        prediction_label: prediction_label.to_string(),
        probability: round4(failure_probability),
        confidence: round4(confidence),
        input_data: observation.clone(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
