//! Decision Rules & Thresholds
//!
//! Thresholds and the class-label contract for turning raw model output
//! into predictions. NO decision logic here - only constants and config.

use serde::Serialize;

// ============================================================================
// THRESHOLDS (empirically tuned constants)
// ============================================================================

/// Binary failure decision threshold.
///
/// Deliberately 0.05 instead of the naive 0.5: the training data is heavily
/// imbalanced and the low threshold biases toward catching rare failures.
pub const BINARY_FAILURE_THRESHOLD: f32 = 0.05;

/// Below this confidence a multiclass prediction is flagged ambiguous.
pub const AMBIGUITY_THRESHOLD: f32 = 0.3;

/// Tool wear (minutes) at or above which a "Tool Wear Failure" override
/// suggestion is emitted alongside a differing model prediction.
pub const TOOL_WEAR_OVERRIDE_THRESHOLD: f32 = 200.0;

/// Number of ranked candidates returned with a multiclass prediction.
pub const TOP_K: usize = 3;

// ============================================================================
// CLASS LABEL CONTRACT
// ============================================================================

/// Failure-type labels in class-index order (alphabetical, from the label
/// encoder used at training time). This order is the contract with the
/// multiclass model and must not be reordered.
pub const FAILURE_TYPE_LABELS: [&str; 6] = [
    "Heat Dissipation Failure", // 0
    "No Failure",               // 1
    "Overstrain Failure",       // 2
    "Power Failure",            // 3
    "Random Failures",          // 4
    "Tool Wear Failure",        // 5
];

/// Label suggested by the tool-wear override rule.
pub const TOOL_WEAR_LABEL: &str = "Tool Wear Failure";

/// Label used for the healthy shortcut result.
pub const NO_FAILURE_LABEL: &str = "No Failure";

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Decision configuration, constructed once and passed to the policies.
/// Defaults are the tuned production values; tests substitute their own.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionConfig {
    /// Failure probability at or above this = label 1
    pub binary_threshold: f32,
    /// Multiclass confidence below this = ambiguous
    pub ambiguity_threshold: f32,
    /// Raw tool wear at or above this triggers the override suggestion
    pub tool_wear_override_threshold: f32,
    /// Size of the ranked candidate list
    pub top_k: usize,
    /// Class labels in model index order
    pub failure_labels: [&'static str; 6],
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            binary_threshold: BINARY_FAILURE_THRESHOLD,
            ambiguity_threshold: AMBIGUITY_THRESHOLD,
            tool_wear_override_threshold: TOOL_WEAR_OVERRIDE_THRESHOLD,
            top_k: TOP_K,
            failure_labels: FAILURE_TYPE_LABELS,
        }
    }
}
