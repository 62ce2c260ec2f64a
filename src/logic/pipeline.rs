//! Prediction Pipeline
//!
//! Sequences encode -> normalize -> inference -> decision over the handles
//! loaded at startup. One synchronous pass per request; the handles are
//! shared read-only and carry no request-scoped state.

use serde::Serialize;

use crate::models::{BinaryPrediction, MachineObservation, MulticlassPrediction};

use super::decision::{binary, multiclass, DecisionConfig};
use super::features::{self, FeatureVector};
use super::model::{ClassifierHandle, ScalerHandle};
use super::PredictionError;

/// Load status and inference metrics for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub binary_model_loaded: bool,
    pub failure_type_model_loaded: bool,
    pub scaler_loaded: bool,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

/// The prediction engine: two classifier handles, the scaler handle and
/// the decision config, constructed once at process start.
pub struct PredictionEngine {
    binary_model: ClassifierHandle,
    failure_type_model: ClassifierHandle,
    scaler: ScalerHandle,
    config: DecisionConfig,
}

impl PredictionEngine {
    pub fn new(
        binary_model: ClassifierHandle,
        failure_type_model: ClassifierHandle,
        scaler: ScalerHandle,
        config: DecisionConfig,
    ) -> Self {
        Self {
            binary_model,
            failure_type_model,
            scaler,
            config,
        }
    }

    /// Encode the observation and apply the fitted scaling.
    fn prepare_features(
        &self,
        observation: &MachineObservation,
    ) -> Result<FeatureVector, PredictionError> {
        let raw = features::encode(observation);
        self.scaler.transform(&raw)
    }

    /// Raw failure probability from the binary detector.
    fn binary_probability(&self, features: &FeatureVector) -> Result<f32, PredictionError> {
        let output = self.binary_model.infer(features)?;
        output
            .first()
            .copied()
            .ok_or_else(|| PredictionError::Inference("binary model returned no output".into()))
    }

    /// Class distribution from the failure-type model, checked against the
    /// label contract.
    fn failure_type_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<Vec<f32>, PredictionError> {
        let output = self.failure_type_model.infer(features)?;
        if output.len() != self.config.failure_labels.len() {
            return Err(PredictionError::Inference(format!(
                "failure type model returned {} classes, expected {}",
                output.len(),
                self.config.failure_labels.len()
            )));
        }
        Ok(output)
    }

    /// Binary failure prediction (0: not failed, 1: failed).
    pub fn predict_binary(
        &self,
        observation: &MachineObservation,
    ) -> Result<BinaryPrediction, PredictionError> {
        let features = self.prepare_features(observation)?;
        let probability = self.binary_probability(&features)?;
        Ok(binary::decide(probability, observation, &self.config))
    }

    /// Failure-type prediction, unconditionally running the multiclass
    /// model. Callers wanting the healthy shortcut use `predict` instead.
    pub fn predict_failure_type(
        &self,
        observation: &MachineObservation,
    ) -> Result<MulticlassPrediction, PredictionError> {
        let features = self.prepare_features(observation)?;
        let probabilities = self.failure_type_probabilities(&features)?;
        Ok(multiclass::decide(&probabilities, observation, &self.config))
    }

    /// Orchestrated prediction: binary stage first; if it judges the
    /// machine healthy the multiclass model is NOT invoked and a synthetic
    /// "No Failure" result is returned. Otherwise the failure-type model
    /// runs on the same normalized feature vector.
    pub fn predict(
        &self,
        observation: &MachineObservation,
    ) -> Result<MulticlassPrediction, PredictionError> {
        let features = self.prepare_features(observation)?;
        let probability = self.binary_probability(&features)?;
        let binary_result = binary::decide(probability, observation, &self.config);

        if binary_result.prediction == 0 {
            tracing::debug!(
                product_id = %observation.product_id,
                "binary predicted not failed, skipping multiclass inference"
            );
            return Ok(multiclass::no_failure_result(observation, &self.config));
        }

        let probabilities = self.failure_type_probabilities(&features)?;
        Ok(multiclass::decide(&probabilities, observation, &self.config))
    }

    pub fn status(&self) -> EngineStatus {
        let binary_count = self.binary_model.inference_count();
        let failure_type_count = self.failure_type_model.inference_count();
        let total = binary_count + failure_type_count;

        let avg_latency_ms = if total > 0 {
            (self.binary_model.avg_latency_ms() * binary_count as f32
                + self.failure_type_model.avg_latency_ms() * failure_type_count as f32)
                / total as f32
        } else {
            0.0
        };

        EngineStatus {
            binary_model_loaded: self.binary_model.is_loaded(),
            failure_type_model_loaded: self.failure_type_model.is_loaded(),
            scaler_loaded: self.scaler.is_loaded(),
            inference_count: total,
            avg_latency_ms,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
