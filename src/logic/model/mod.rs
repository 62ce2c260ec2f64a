//! Model Module - Inference and Normalization Artifacts
//!
//! Loading and running of the external pre-trained artifacts: the two ONNX
//! classifiers and the fitted min-max scaler. Decision logic lives in
//! `logic::decision`, not here.

pub mod inference;
pub mod scaler;

pub use inference::{Classifier, ClassifierHandle, OnnxClassifier};
pub use scaler::{MinMaxParams, ScalerHandle};
