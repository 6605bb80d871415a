// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

//! Error types for the rockfall inference library.

use std::fmt;

/// Result type alias for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Main error type for the rockfall inference library.
#[derive(Debug)]
pub enum PredictError {
    /// Error loading the serialized model artifact.
    ModelLoadError(String),
    /// Wrong number of feature arguments supplied.
    ArgumentCountError(String),
    /// A feature token could not be parsed as a number.
    InvalidInput(String),
    /// Error during model prediction.
    PredictionError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::ArgumentCountError(msg) => write!(f, "Argument error: {msg}"),
            Self::InvalidInput(msg) => write!(f, "Invalid numerical input: {msg}"),
            Self::PredictionError(msg) => write!(f, "Prediction error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredictError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<bincode::Error> for PredictError {
    fn from(err: bincode::Error) -> Self {
        Self::ModelLoadError(err.to_string())
    }
}
