//! Inference Engine - ONNX Runtime Integration
//!
//! Wraps the pre-trained classifiers behind a trait so the decision
//! pipeline never touches the runtime directly. Models are loaded once at
//! startup into explicit handles; an absent model is a checkable state,
//! not a null global.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use anyhow::Context;
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use crate::logic::PredictionError;

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Seam over the opaque pre-trained models.
///
/// The binary detector returns a single probability, the failure-type
/// model a distribution aligned to the fixed label order; both come back
/// as the model's raw output row.
pub trait Classifier: Send + Sync {
    fn infer(&self, features: &FeatureVector) -> Result<Vec<f32>, PredictionError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX-backed classifier. `Session::run` needs `&mut`, so the session
/// sits behind a mutex; each request holds it only for its own inference.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxClassifier {
    /// Load an ONNX model from a file.
    pub fn load(model_path: &str) -> anyhow::Result<Self> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            anyhow::bail!("model not found: {}", model_path);
        }

        let session = Session::builder()
            .context("creating session builder")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("setting optimization level")?
            .commit_from_file(model_path)
            .with_context(|| format!("loading model {}", model_path))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .context("model defines no output")?;

        tracing::info!("ONNX model loaded successfully: {}", model_path);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn infer(&self, features: &FeatureVector) -> Result<Vec<f32>, PredictionError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_vec())
            .map_err(|e| PredictionError::Inference(format!("array error: {e}")))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| PredictionError::Inference(format!("tensor error: {e}")))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| PredictionError::Inference(format!("inference failed: {e}")))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| PredictionError::Inference("no output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictionError::Inference(format!("extract error: {e}")))?;

        Ok(output_tensor.1.to_vec())
    }
}

// ============================================================================
// CLASSIFIER HANDLE
// ============================================================================

/// Per-model state constructed once at process start and shared read-only
/// by every request. Tracks load status and basic inference metrics.
pub struct ClassifierHandle {
    name: &'static str,
    inner: Option<Box<dyn Classifier>>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl ClassifierHandle {
    pub fn loaded(name: &'static str, classifier: Box<dyn Classifier>) -> Self {
        Self {
            name,
            inner: Some(classifier),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self {
            name,
            inner: None,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.is_some()
    }

    /// Run the underlying model, tracking latency stats.
    pub fn infer(&self, features: &FeatureVector) -> Result<Vec<f32>, PredictionError> {
        let classifier = self
            .inner
            .as_deref()
            .ok_or(PredictionError::ModelUnavailable(self.name))?;

        let start = Instant::now();
        let output = classifier.infer(features)?;

        self.latency_sum_us
            .fetch_add(start.elapsed().as_micros() as u64, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(output)
    }

    pub fn inference_count(&self) -> u64 {
        self.inference_count.load(Ordering::Relaxed)
    }

    /// Average inference latency in milliseconds.
    pub fn avg_latency_ms(&self) -> f32 {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier(Vec<f32>);

    impl Classifier for FixedClassifier {
        fn infer(&self, _features: &FeatureVector) -> Result<Vec<f32>, PredictionError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_unavailable_handle_fails_fast() {
        let handle = ClassifierHandle::unavailable("binary");
        let err = handle.infer(&[0.0; FEATURE_COUNT]).unwrap_err();
        assert!(matches!(err, PredictionError::ModelUnavailable("binary")));
        assert!(!handle.is_loaded());
    }

    #[test]
    fn test_loaded_handle_delegates_and_counts() {
        let handle =
            ClassifierHandle::loaded("binary", Box::new(FixedClassifier(vec![0.42])));

        let output = handle.infer(&[0.0; FEATURE_COUNT]).unwrap();
        assert_eq!(output, vec![0.42]);
        assert_eq!(handle.inference_count(), 1);

        handle.infer(&[0.0; FEATURE_COUNT]).unwrap();
        assert_eq!(handle.inference_count(), 2);
    }
}
