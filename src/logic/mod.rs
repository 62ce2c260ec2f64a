//! Prediction Core
//!
//! Everything between the validated HTTP request and the raw model output:
//! feature encoding, min-max scaling, threshold/confidence policies and the
//! orchestrated prediction pipeline.

pub mod decision;
pub mod features;
pub mod model;
pub mod pipeline;

use thiserror::Error;

/// Failures the prediction core surfaces to the boundary.
///
/// An unrecognized machine type is deliberately NOT here: it resolves
/// silently to the default type code (see `features::encoder`).
#[derive(Debug, Error)]
pub enum PredictionError {
    /// A required classifier failed to load at startup. All prediction
    /// calls depending on it fail until the model is fixed.
    #[error("{0} model is not loaded")]
    ModelUnavailable(&'static str),

    /// The fitted min-max scaler failed to load at startup. Fatal to both
    /// prediction paths - no meaningful feature vector can be produced.
    #[error("normalization scaler is not loaded")]
    NormalizationUnavailable,

    /// The runtime failed, or a model broke its output contract.
    #[error("inference failed: {0}")]
    Inference(String),
}
