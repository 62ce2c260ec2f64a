//! Prediction response models
//!
//! Data structures only - decision logic lives in `logic::decision`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::machine::MachineObservation;

// ============================================================================
// BINARY PREDICTION
// ============================================================================

/// Result of the binary failure detector.
#[derive(Debug, Clone, Serialize)]
pub struct BinaryPrediction {
    /// 0 = not failed, 1 = failed
    pub prediction: u8,
    /// Human-readable form of `prediction`
    pub prediction_label: String,
    /// Raw model failure probability, rounded to 4 decimals
    pub probability: f32,
    /// Probability mass of the chosen label, rounded to 4 decimals
    pub confidence: f32,
    /// Observation exactly as submitted
    pub input_data: MachineObservation,
}

// ============================================================================
// MULTICLASS PREDICTION
// ============================================================================

/// One ranked failure-type candidate.
#[derive(Debug, Clone, Serialize)]
pub struct TopPrediction {
    pub label: String,
    pub prob: f32,
}

/// Rule-based suggestion surfaced alongside the model's own prediction.
#[derive(Debug, Clone, Serialize)]
pub struct OverrideSuggestion {
    pub label: String,
    pub reason: String,
}

/// Result of the failure-type classifier (or the healthy shortcut).
///
/// The label set happens to be alphabetical, so the `BTreeMap` serializes
/// the probability map in class-index order.
#[derive(Debug, Clone, Serialize)]
pub struct MulticlassPrediction {
    /// Predicted failure-type label
    pub prediction: String,
    /// Every label mapped to its rounded probability
    pub probabilities: BTreeMap<String, f32>,
    /// Max class probability, rounded to 4 decimals
    pub confidence: f32,
    /// Observation exactly as submitted
    pub input_data: MachineObservation,
    /// True when confidence fell below the ambiguity threshold
    pub ambiguous: bool,
    /// Ranked top candidates; absent for the healthy shortcut
    pub top_k: Option<Vec<TopPrediction>>,
    /// Rule-based override; absent when no rule fired
    pub suggested_override: Option<OverrideSuggestion>,
}

impl MulticlassPrediction {
    /// Whether the multiclass model actually ran for this result.
    pub fn from_shortcut(&self) -> bool {
        self.top_k.is_none()
    }
}

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Generic envelope wrapping every successful API response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub error: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
            error: String::new(),
            data,
        }
    }
}
