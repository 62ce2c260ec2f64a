//! Feature Encoder - Observation to Raw Model Input
//!
//! Maps a machine observation to the raw (unnormalized) feature vector in
//! the training column order. No range validation happens here; the HTTP
//! boundary already enforced it.

use crate::models::MachineObservation;
use super::layout::FeatureVector;

/// Label code used when the machine type is not recognized.
///
/// The training data only contains H/L/M machines and the original encoder
/// falls back to "M" for anything else. This is a deliberate silent
/// fallback, not an error.
pub const UNKNOWN_TYPE_CODE: f32 = 2.0;

/// Encode the machine type string to its label code.
///
/// Codes come from alphabetical label encoding at training time:
/// H=0, L=1, M=2. Matching is case-insensitive.
pub fn encode_machine_type(machine_type: &str) -> f32 {
    match machine_type.to_uppercase().as_str() {
        "H" => 0.0,
        "L" => 1.0,
        "M" => 2.0,
        _ => UNKNOWN_TYPE_CODE,
    }
}

/// Build the raw feature vector for an observation.
///
/// Column order MUST match training:
/// type, air_temperature, process_temperature, rotational_speed, torque, tool_wear
pub fn encode(observation: &MachineObservation) -> FeatureVector {
    [
        encode_machine_type(&observation.machine_type),
        observation.air_temperature,
        observation.process_temperature,
        observation.rotational_speed,
        observation.torque,
        observation.tool_wear,
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MachineObservation;

    fn observation(machine_type: &str) -> MachineObservation {
        MachineObservation {
            product_id: "L47181".to_string(),
            machine_type: machine_type.to_string(),
            air_temperature: 298.1,
            process_temperature: 308.6,
            rotational_speed: 1551.0,
            torque: 42.8,
            tool_wear: 10.0,
        }
    }

    #[test]
    fn test_type_codes_alphabetical() {
        assert_eq!(encode_machine_type("H"), 0.0);
        assert_eq!(encode_machine_type("L"), 1.0);
        assert_eq!(encode_machine_type("M"), 2.0);
    }

    #[test]
    fn test_type_code_case_insensitive() {
        assert_eq!(encode_machine_type("h"), 0.0);
        assert_eq!(encode_machine_type("l"), 1.0);
        assert_eq!(encode_machine_type("m"), 2.0);
    }

    #[test]
    fn test_unknown_type_defaults_to_m() {
        assert_eq!(encode_machine_type("X"), 2.0);
        assert_eq!(encode_machine_type(""), 2.0);
        assert_eq!(encode_machine_type("low"), 2.0);
    }

    #[test]
    fn test_encode_column_order() {
        let vector = encode(&observation("H"));
        assert_eq!(vector, [0.0, 298.1, 308.6, 1551.0, 42.8, 10.0]);
    }

    #[test]
    fn test_encode_passes_numeric_fields_unchanged() {
        let obs = observation("L");
        let vector = encode(&obs);
        assert_eq!(vector[1], obs.air_temperature);
        assert_eq!(vector[5], obs.tool_wear);
    }
}
