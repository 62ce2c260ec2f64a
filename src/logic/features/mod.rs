//! Features Module - Observation Encoding
//!
//! Turns typed machine observations into the raw numeric vector the
//! classifiers were trained on. Layout is centralized in `layout.rs`.

pub mod encoder;
pub mod layout;

// Re-export common types
pub use encoder::{encode, encode_machine_type};
pub use layout::{FeatureVector, FEATURE_COUNT, NUMERIC_FEATURE_COUNT, NUMERIC_FEATURE_OFFSET};
