//! Machine observation request model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One machine observation as submitted by the caller.
///
/// `product_id` is opaque - echoed back in responses, never used in
/// prediction. The five sensor readings must be non-negative; range
/// checking is done here at the boundary, not in the encoder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MachineObservation {
    pub product_id: String,

    /// Machine quality variant: H, L or M (case-insensitive)
    #[serde(rename = "type")]
    pub machine_type: String,

    /// Air temperature [K]
    #[validate(range(min = 0.0))]
    pub air_temperature: f32,

    /// Process temperature [K]
    #[validate(range(min = 0.0))]
    pub process_temperature: f32,

    /// Rotational speed [rpm]
    #[validate(range(min = 0.0))]
    pub rotational_speed: f32,

    /// Torque [Nm]
    #[validate(range(min = 0.0))]
    pub torque: f32,

    /// Tool wear [min]
    #[validate(range(min = 0.0))]
    pub tool_wear: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_sensor_reading_rejected() {
        let obs = MachineObservation {
            product_id: "M14860".to_string(),
            machine_type: "M".to_string(),
            air_temperature: 298.1,
            process_temperature: 308.6,
            rotational_speed: 1551.0,
            torque: -1.0,
            tool_wear: 0.0,
        };
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_type_field_name_in_json() {
        let json = r#"{
            "product_id": "L47181",
            "type": "L",
            "air_temperature": 298.2,
            "process_temperature": 308.7,
            "rotational_speed": 1408,
            "torque": 46.3,
            "tool_wear": 3
        }"#;
        let obs: MachineObservation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.machine_type, "L");
        assert!(obs.validate().is_ok());
    }
}
