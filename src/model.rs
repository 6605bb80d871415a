// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

//! Model artifact loading and prediction.
//!
//! This module provides the main `RockfallModel` struct for loading the
//! serialized risk model and scoring a single feature row.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

/// File name of the model artifact, resolved next to the executable.
pub const DEFAULT_MODEL: &str = "model.bin";

/// Link function applied to the linear score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Link {
    /// Raw linear score. May leave [0, 1]; callers clamp.
    Identity,
    /// Logistic sigmoid, maps the score into (0, 1).
    Logistic,
}

impl Link {
    /// Returns the string representation used in summaries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Logistic => "logistic",
        }
    }

    fn apply(self, z: f64) -> f64 {
        match self {
            Self::Identity => z,
            Self::Logistic => 1.0 / (1.0 + (-z).exp()),
        }
    }
}

/// Trained rockfall risk model.
///
/// A linear model over the fixed feature row: per-feature weights, a bias
/// term, and a link function. Deserialized once at startup and immutable
/// for the lifetime of the process.
///
/// # Example
///
/// ```no_run
/// use rockfall_inference::RockfallModel;
///
/// let model = RockfallModel::load("model.bin")?;
/// # Ok::<(), rockfall_inference::PredictError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RockfallModel {
    /// Model name, for display only.
    name: String,
    /// Per-feature weights, one per input feature.
    weights: Vec<f64>,
    /// Bias term added to the weighted sum.
    bias: f64,
    /// Link function applied to the linear score.
    link: Link,
}

impl RockfallModel {
    /// Create a model from raw parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, weights: Vec<f64>, bias: f64, link: Link) -> Self {
        Self {
            name: name.into(),
            weights,
            bias,
            link,
        }
    }

    /// Load a model from a serialized artifact file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the artifact file.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::ModelLoadError`] if the file doesn't exist
    /// or the bytes fail to decode.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PredictError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        // Read fully and release the handle before any prediction work.
        let bytes = fs::read(path)?;
        let model: Self = bincode::deserialize(&bytes).map_err(|e| {
            PredictError::ModelLoadError(format!(
                "Failed to decode {}: {e}",
                path.display()
            ))
        })?;

        Ok(model)
    }

    /// Serialize the model to an artifact file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the file write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = bincode::serialize(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of features the model expects.
    #[must_use]
    pub fn num_features(&self) -> usize {
        self.weights.len()
    }

    /// Link function of this model.
    #[must_use]
    pub const fn link(&self) -> Link {
        self.link
    }

    /// Score a single feature row.
    ///
    /// The output is the linear score passed through the link function. It
    /// is in principle a probability but is not guaranteed to lie in
    /// [0, 1]; callers clamp defensively.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::PredictionError`] if the row length does not
    /// match the model's weight count.
    pub fn predict_row(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        if row.len() != self.weights.len() {
            return Err(PredictError::PredictionError(format!(
                "model expects {} features, got {}",
                self.weights.len(),
                row.len()
            )));
        }

        let z: f64 = row
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias;

        Ok(self.link.apply(z))
    }

    /// Default artifact path, co-located with the executable.
    ///
    /// Falls back to a path relative to the working directory when the
    /// executable location cannot be determined.
    #[must_use]
    pub fn default_artifact_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_MODEL)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL))
    }
}
