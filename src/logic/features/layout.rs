//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the model input schema**
//!
//! The column order is a fixed contract with the trained classifiers.
//! Reordering silently corrupts predictions - never change it without
//! retraining both models and refitting the scaler.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the model input vector.
/// This is the SINGLE SOURCE OF TRUTH for the input layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    "type",                 // 0: Machine type code (H=0, L=1, M=2)
    "air_temperature",      // 1: Air temperature [K]
    "process_temperature",  // 2: Process temperature [K]
    "rotational_speed",     // 3: Rotational speed [rpm]
    "torque",               // 4: Torque [Nm]
    "tool_wear",            // 5: Tool wear [min]
];

/// Total number of model input features.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

/// Number of numeric sensor columns (everything after the type code).
/// The scaler was fitted over these columns only.
pub const NUMERIC_FEATURE_COUNT: usize = 5;

/// Index of the first numeric column in the vector.
pub const NUMERIC_FEATURE_OFFSET: usize = 1;

/// Model input vector in the layout above.
pub type FeatureVector = [f32; FEATURE_COUNT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts_agree() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
        assert_eq!(NUMERIC_FEATURE_OFFSET + NUMERIC_FEATURE_COUNT, FEATURE_COUNT);
    }
}
