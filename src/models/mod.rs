//! Data models

pub mod machine;
pub mod prediction;

pub use machine::MachineObservation;
pub use prediction::{
    ApiResponse, BinaryPrediction, MulticlassPrediction, OverrideSuggestion, TopPrediction,
};
