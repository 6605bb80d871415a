// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

//! Feature vector definitions and parsing.
//!
//! The model scores a single sensor reading described by exactly
//! [`FEATURE_COUNT`] ordered scalars. Positional order is an invariant the
//! caller must respect; only numeric parseability is validated here, not
//! physical plausibility.

use ndarray::Array1;

use crate::error::{PredictError, Result};

/// Number of input features the model consumes.
pub const FEATURE_COUNT: usize = 13;

/// A named input feature with its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDef {
    /// Human-readable feature name.
    pub name: &'static str,
    /// Display unit (ASCII, kept machine-parseable downstream).
    pub unit: &'static str,
}

impl FeatureDef {
    /// Feature label with unit, e.g. `Rainfall (mm/day)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

/// The fixed feature order. Command-line arguments map to these by position.
pub const FEATURES: [FeatureDef; FEATURE_COUNT] = [
    FeatureDef { name: "Rainfall", unit: "mm/day" },
    FeatureDef { name: "Depth to Groundwater", unit: "m" },
    FeatureDef { name: "Pore Water Pressure", unit: "kPa" },
    FeatureDef { name: "Surface Runoff", unit: "m3/s" },
    FeatureDef { name: "Unit Weight", unit: "kN/m3" },
    FeatureDef { name: "Cohesion", unit: "kPa" },
    FeatureDef { name: "Internal Friction Angle", unit: "deg" },
    FeatureDef { name: "Slope Angle", unit: "deg" },
    FeatureDef { name: "Slope Height", unit: "m" },
    FeatureDef { name: "Pore Water Pressure Ratio", unit: "ratio" },
    FeatureDef { name: "Bench Height", unit: "m" },
    FeatureDef { name: "Bench Width", unit: "m" },
    FeatureDef { name: "Inter-Ramp Angle", unit: "deg" },
];

/// Parse command-line tokens into a feature row.
///
/// Anything `f64` accepts passes, including `NaN` and `inf`; like the
/// rest of the pipeline, this validates parseability, not physical
/// plausibility. Infinite values clamp to the probability bounds
/// downstream; `NaN` propagates into the report line.
///
/// # Arguments
///
/// * `tokens` - Raw argument tokens, one per feature, in [`FEATURES`] order.
///
/// # Errors
///
/// Returns [`PredictError::ArgumentCountError`] if the token count is not
/// exactly [`FEATURE_COUNT`], or [`PredictError::InvalidInput`] naming the
/// first token that fails to parse as a float.
pub fn parse_features<S: AsRef<str>>(tokens: &[S]) -> Result<Array1<f64>> {
    if tokens.len() != FEATURE_COUNT {
        return Err(PredictError::ArgumentCountError(format!(
            "expected exactly {FEATURE_COUNT} feature values, got {}",
            tokens.len()
        )));
    }

    let mut values = Vec::with_capacity(FEATURE_COUNT);
    for token in tokens {
        let token = token.as_ref();
        let value: f64 = token.parse().map_err(|_| {
            PredictError::InvalidInput(format!("'{token}' is not a valid number"))
        })?;
        values.push(value);
    }

    Ok(Array1::from_vec(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_table_shape() {
        assert_eq!(FEATURES.len(), FEATURE_COUNT);

        // Names are distinct (the factor ranking relies on this).
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_feature_label() {
        assert_eq!(FEATURES[0].label(), "Rainfall (mm/day)");
        assert_eq!(FEATURES[12].label(), "Inter-Ramp Angle (deg)");
    }

    #[test]
    fn test_parse_features_valid() {
        let tokens: Vec<String> = (0..13).map(|i| format!("{}.5", i)).collect();
        let row = parse_features(&tokens).unwrap();
        assert_eq!(row.len(), FEATURE_COUNT);
        assert!((row[0] - 0.5).abs() < f64::EPSILON);
        assert!((row[12] - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_features_negative_and_exponent() {
        let mut tokens = vec!["0".to_string(); 13];
        tokens[3] = "-2.5".to_string();
        tokens[7] = "1e-3".to_string();
        let row = parse_features(&tokens).unwrap();
        assert!((row[3] + 2.5).abs() < f64::EPSILON);
        assert!((row[7] - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_features_accepts_non_finite_tokens() {
        let mut tokens = vec!["0".to_string(); 13];
        tokens[0] = "NaN".to_string();
        tokens[1] = "inf".to_string();
        tokens[2] = "-inf".to_string();

        let row = parse_features(&tokens).unwrap();
        assert!(row[0].is_nan());
        assert_eq!(row[1], f64::INFINITY);
        assert_eq!(row[2], f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_features_wrong_count() {
        let tokens = vec!["1.0"; 12];
        match parse_features(&tokens) {
            Err(PredictError::ArgumentCountError(msg)) => {
                assert!(msg.contains("13"));
                assert!(msg.contains("12"));
            }
            other => panic!("expected argument count error, got {other:?}"),
        }

        let tokens = vec!["1.0"; 14];
        assert!(matches!(
            parse_features(&tokens),
            Err(PredictError::ArgumentCountError(_))
        ));
    }

    #[test]
    fn test_parse_features_invalid_token() {
        let mut tokens = vec!["1.0".to_string(); 13];
        tokens[5] = "abc".to_string();
        match parse_features(&tokens) {
            Err(PredictError::InvalidInput(msg)) => assert!(msg.contains("'abc'")),
            other => panic!("expected invalid input error, got {other:?}"),
        }
    }
}
