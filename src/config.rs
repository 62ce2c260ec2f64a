//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the binary failure detector (ONNX)
    pub binary_model_path: String,

    /// Path to the failure-type classifier (ONNX)
    pub failure_type_model_path: String,

    /// Path to the fitted min-max scaler artifact (JSON)
    pub scaler_path: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            binary_model_path: env::var("BINARY_MODEL_PATH")
                .unwrap_or_else(|_| "models/binary_failure.onnx".to_string()),

            failure_type_model_path: env::var("FAILURE_TYPE_MODEL_PATH")
                .unwrap_or_else(|_| "models/failure_type.onnx".to_string()),

            scaler_path: env::var("SCALER_PATH")
                .unwrap_or_else(|_| "models/scaler.json".to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only checks the fallbacks that no test environment overrides
        let config = Config::from_env();
        assert!(!config.binary_model_path.is_empty());
        assert!(!config.scaler_path.is_empty());
    }
}
