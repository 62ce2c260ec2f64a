//! Min-Max Scaler - Fitted Normalization Artifact
//!
//! Applies the per-column min/max captured from the training data. The
//! artifact is fitted offline, loaded once at startup and never mutated.
//!
//! Only the 5 numeric sensor columns are scaled; the type-code column
//! passes through as-is (the scaler was fitted over numeric columns only).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::logic::features::{
    FeatureVector, NUMERIC_FEATURE_COUNT, NUMERIC_FEATURE_OFFSET,
};
use crate::logic::PredictionError;

/// Fitted min/max values, one entry per numeric sensor column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxParams {
    pub min_vals: Vec<f32>,
    pub max_vals: Vec<f32>,
}

impl MinMaxParams {
    /// Load the artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scaler artifact {}", path.display()))?;
        let params: MinMaxParams = serde_json::from_str(&raw)
            .with_context(|| format!("parsing scaler artifact {}", path.display()))?;

        if params.min_vals.len() != NUMERIC_FEATURE_COUNT
            || params.max_vals.len() != NUMERIC_FEATURE_COUNT
        {
            anyhow::bail!(
                "scaler artifact has {}/{} columns, expected {}",
                params.min_vals.len(),
                params.max_vals.len(),
                NUMERIC_FEATURE_COUNT
            );
        }

        Ok(params)
    }
}

/// Explicit loaded-or-unavailable state for the scaler artifact.
///
/// Absence is a checkable state rather than a silent null: prediction
/// calls fail with `NormalizationUnavailable` until the artifact loads.
#[derive(Debug)]
pub struct ScalerHandle {
    inner: Option<MinMaxParams>,
}

impl ScalerHandle {
    pub fn loaded(params: MinMaxParams) -> Self {
        Self { inner: Some(params) }
    }

    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.is_some()
    }

    /// Normalize the numeric columns of a raw feature vector.
    ///
    /// `normalized = (raw - min) / (max - min)` per column. No clamping:
    /// inputs outside the training range legitimately land outside [0, 1].
    pub fn transform(&self, raw: &FeatureVector) -> Result<FeatureVector, PredictionError> {
        let params = self
            .inner
            .as_ref()
            .ok_or(PredictionError::NormalizationUnavailable)?;

        let mut scaled = *raw;
        for col in 0..NUMERIC_FEATURE_COUNT {
            let min_val = params.min_vals[col];
            let max_val = params.max_vals[col];
            // Floor the denominator so a degenerate artifact cannot divide by zero
            let range = (max_val - min_val).max(1e-8);
            let i = NUMERIC_FEATURE_OFFSET + col;
            scaled[i] = (raw[i] - min_val) / range;
        }

        Ok(scaled)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MinMaxParams {
        MinMaxParams {
            min_vals: vec![295.0, 305.0, 1000.0, 0.0, 0.0],
            max_vals: vec![305.0, 315.0, 3000.0, 80.0, 250.0],
        }
    }

    #[test]
    fn test_transform_reproduces_fitted_scaling() {
        let scaler = ScalerHandle::loaded(fixture());
        let raw = [1.0, 300.0, 310.0, 2000.0, 40.0, 125.0];

        let scaled = scaler.transform(&raw).unwrap();
        assert!((scaled[1] - 0.5).abs() < 1e-6);
        assert!((scaled[2] - 0.5).abs() < 1e-6);
        assert!((scaled[3] - 0.5).abs() < 1e-6);
        assert!((scaled[4] - 0.5).abs() < 1e-6);
        assert!((scaled[5] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_type_code_column_passes_through() {
        let scaler = ScalerHandle::loaded(fixture());
        let raw = [2.0, 295.0, 305.0, 1000.0, 0.0, 0.0];

        let scaled = scaler.transform(&raw).unwrap();
        assert_eq!(scaled[0], 2.0);
        assert_eq!(scaled[1], 0.0);
    }

    #[test]
    fn test_out_of_range_values_are_not_clamped() {
        let scaler = ScalerHandle::loaded(fixture());

        // Below historical min -> negative, above historical max -> > 1.0
        let raw = [0.0, 290.0, 320.0, 1000.0, 0.0, 0.0];
        let scaled = scaler.transform(&raw).unwrap();
        assert!(scaled[1] < 0.0);
        assert!(scaled[2] > 1.0);
    }

    #[test]
    fn test_unavailable_scaler_is_an_error() {
        let scaler = ScalerHandle::unavailable();
        let err = scaler.transform(&[0.0; 6]).unwrap_err();
        assert!(matches!(err, PredictionError::NormalizationUnavailable));
    }
}
