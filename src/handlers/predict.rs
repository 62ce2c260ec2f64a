//! Prediction handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{ApiResponse, BinaryPrediction, MachineObservation, MulticlassPrediction};
use crate::{AppResult, AppState};

/// Binary failure prediction (0: not failed, 1: failed).
pub async fn binary(
    State(state): State<AppState>,
    Json(observation): Json<MachineObservation>,
) -> AppResult<Json<ApiResponse<BinaryPrediction>>> {
    observation.validate()?;

    let result = state.engine.predict_binary(&observation)?;
    Ok(Json(ApiResponse::ok("Binary prediction successful", result)))
}

/// Failure-type prediction via the orchestrated pipeline: when the binary
/// stage predicts no failure, the multiclass model is skipped and the
/// response says so.
pub async fn failure_type(
    State(state): State<AppState>,
    Json(observation): Json<MachineObservation>,
) -> AppResult<Json<ApiResponse<MulticlassPrediction>>> {
    observation.validate()?;

    let result = state.engine.predict(&observation)?;
    let message = if result.from_shortcut() {
        "Binary predicted not failed; multiclass prediction not performed"
    } else {
        "Failure type prediction successful"
    };

    Ok(Json(ApiResponse::ok(message, result)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::logic::decision::DecisionConfig;
    use crate::logic::features::FeatureVector;
    use crate::logic::model::{Classifier, ClassifierHandle, MinMaxParams, ScalerHandle};
    use crate::logic::pipeline::PredictionEngine;
    use crate::logic::PredictionError;

    struct FixedClassifier(Vec<f32>);

    impl Classifier for FixedClassifier {
        fn infer(&self, _features: &FeatureVector) -> Result<Vec<f32>, PredictionError> {
            Ok(self.0.clone())
        }
    }

    fn state(binary_prob: f32, type_probs: Vec<f32>) -> AppState {
        let engine = PredictionEngine::new(
            ClassifierHandle::loaded("binary", Box::new(FixedClassifier(vec![binary_prob]))),
            ClassifierHandle::loaded("failure type", Box::new(FixedClassifier(type_probs))),
            ScalerHandle::loaded(MinMaxParams {
                min_vals: vec![0.0; 5],
                max_vals: vec![1.0; 5],
            }),
            DecisionConfig::default(),
        );
        AppState {
            engine: Arc::new(engine),
            config: Config::from_env(),
        }
    }

    fn observation() -> MachineObservation {
        MachineObservation {
            product_id: "M14860".to_string(),
            machine_type: "M".to_string(),
            air_temperature: 298.1,
            process_temperature: 308.6,
            rotational_speed: 1551.0,
            torque: 42.8,
            tool_wear: 0.0,
        }
    }

    #[test]
    fn test_binary_handler_envelope() {
        let response = tokio_test::block_on(binary(
            State(state(0.02, vec![])),
            Json(observation()),
        ))
        .unwrap();

        assert_eq!(response.0.status_code, 200);
        assert_eq!(response.0.message, "Binary prediction successful");
        assert_eq!(response.0.data.prediction, 0);
    }

    #[test]
    fn test_failure_type_handler_reports_shortcut() {
        let response = tokio_test::block_on(failure_type(
            State(state(0.01, vec![])),
            Json(observation()),
        ))
        .unwrap();

        assert_eq!(
            response.0.message,
            "Binary predicted not failed; multiclass prediction not performed"
        );
        assert_eq!(response.0.data.prediction, "No Failure");
    }

    #[test]
    fn test_invalid_observation_rejected() {
        let mut bad = observation();
        bad.torque = -5.0;

        let result = tokio_test::block_on(binary(State(state(0.5, vec![])), Json(bad)));
        assert!(matches!(result, Err(crate::AppError::ValidationError(_))));
    }
}
