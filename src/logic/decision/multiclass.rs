//! Multiclass Decision Policy
//!
//! Turns the failure-type model's probability distribution into a labeled
//! prediction with confidence, ambiguity flag, top-k ranking and the
//! rule-based tool-wear override. Also builds the synthetic healthy result
//! used by the orchestrator's shortcut.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{MachineObservation, MulticlassPrediction, OverrideSuggestion, TopPrediction};

use super::round4;
use super::rules::{DecisionConfig, NO_FAILURE_LABEL, TOOL_WEAR_LABEL};

/// Decide the failure type from the model's class distribution.
///
/// `probabilities` is aligned to `config.failure_labels` (the class-index
/// contract). Ties resolve to the first label in the fixed order.
pub fn decide(
    probabilities: &[f32],
    observation: &MachineObservation,
    config: &DecisionConfig,
) -> MulticlassPrediction {
    debug_assert_eq!(probabilities.len(), config.failure_labels.len());

    // Argmax; strictly-greater keeps the first label on ties
    let mut predicted_idx = 0;
    for (i, &prob) in probabilities.iter().enumerate() {
        if prob > probabilities[predicted_idx] {
            predicted_idx = i;
        }
    }
    let prediction = config.failure_labels[predicted_idx].to_string();
    let confidence = probabilities[predicted_idx];

    let probability_map: BTreeMap<String, f32> = config
        .failure_labels
        .iter()
        .zip(probabilities.iter())
        .map(|(label, &prob)| (label.to_string(), round4(prob)))
        .collect();

    let ambiguous = confidence < config.ambiguity_threshold;
    let top_k = rank_top_k(probabilities, config);
    let suggested_override = tool_wear_override(&prediction, observation, config);

    MulticlassPrediction {
        prediction,
        probabilities: probability_map,
        confidence: round4(confidence),
        input_data: observation.clone(),
        ambiguous,
        top_k: Some(top_k),
        suggested_override,
    }
}

/// Rank the `top_k` highest-probability labels, descending.
/// The sort is stable, so ties keep the fixed label order.
fn rank_top_k(probabilities: &[f32], config: &DecisionConfig) -> Vec<TopPrediction> {
    let mut ranked: Vec<(usize, f32)> = probabilities.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(config.top_k)
        .map(|(idx, prob)| TopPrediction {
            label: config.failure_labels[idx].to_string(),
            prob,
        })
        .collect()
}

/// Rule-based override: very high tool wear suggests "Tool Wear Failure"
/// even when the model predicted something else. Uses the RAW observation
/// value, not the normalized feature.
fn tool_wear_override(
    prediction: &str,
    observation: &MachineObservation,
    config: &DecisionConfig,
) -> Option<OverrideSuggestion> {
    if observation.tool_wear >= config.tool_wear_override_threshold
        && prediction != TOOL_WEAR_LABEL
    {
        Some(OverrideSuggestion {
            label: TOOL_WEAR_LABEL.to_string(),
            reason: format!(
                "tool_wear >= {} (raw value: {})",
                config.tool_wear_override_threshold, observation.tool_wear
            ),
        })
    } else {
        None
    }
}

/// Synthetic result for the healthy shortcut: the binary stage already
/// judged the machine fine, so the multiclass model is never invoked.
pub fn no_failure_result(
    observation: &MachineObservation,
    config: &DecisionConfig,
) -> MulticlassPrediction {
    let probabilities: BTreeMap<String, f32> = config
        .failure_labels
        .iter()
        .map(|&label| {
            let prob = if label == NO_FAILURE_LABEL { 1.0 } else { 0.0 };
            (label.to_string(), prob)
        })
        .collect();

    MulticlassPrediction {
        prediction: NO_FAILURE_LABEL.to_string(),
        probabilities,
        confidence: 1.0,
        input_data: observation.clone(),
        ambiguous: false,
        top_k: None,
        suggested_override: None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
