// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Rockfall Risk Inference Library
//!
//! Command-line inference shim for the Rockfall AI risk model: loads a
//! previously trained model from a serialized artifact, scores a single
//! 13-feature sensor reading, and prints one formatted risk report line.
//!
//! There is no training, no data pipeline, and no concurrency here; each
//! invocation is one linear pass from arguments to report line.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use rockfall_inference::{parse_features, Assessment, RockfallModel};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = RockfallModel::load("model.bin")?;
//!
//!     let tokens = vec!["12.5"; 13];
//!     let row = parse_features(&tokens)?;
//!
//!     let score = model.predict_row(row.view())?;
//!     let assessment = Assessment::new(score);
//!     println!("{}", assessment.report_line());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Score one reading (13 positional feature values)
//! rockfall-inference predict 12.5 8.2 45.0 0.3 22.1 35.0 30.0 55.0 120.0 0.4 15.0 8.0 48.0
//!
//! # With an explicit model artifact
//! rockfall-inference predict --model ml/model.bin 0 0 0 0 0 0 0 0 0 0 0 0 0
//!
//! # Quiet mode: only the report line on stdout
//! rockfall-inference predict --verbose false 12.5 8.2 45.0 0.3 22.1 35.0 30.0 55.0 120.0 0.4 15.0 8.0 48.0
//! ```
//!
//! On success the program exits 0 and prints exactly one line:
//!
//! ```text
//! The chance of rockfall is 87.6543%. Top contributing factors: Slope Angle (deg) (11.8%), Rainfall (mm/day) (10.9%), Cohesion (kPa) (10.2%).
//! ```
//!
//! Wrong argument count, non-numeric input, or a missing/corrupt artifact
//! exit 1 with a diagnostic on stderr and nothing on stdout.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | [`RockfallModel`] artifact loading and scoring |
//! | [`features`] | Fixed 13-feature order and argument parsing |
//! | [`results`] | [`Assessment`], [`RiskLevel`], report formatting |
//! | [`ranking`] | Synthetic contributing-factor ranking (display-only) |
//! | [`error`] | Error types ([`PredictError`], [`Result`]) |
//!
//! The contributing-factor text is a fixed-seed synthetic distribution over
//! the feature names. It is not derived from the trained model.

// Modules
pub mod cli;
pub mod error;
pub mod features;
pub mod model;
pub mod ranking;
pub mod results;

// Re-export main types for convenience
pub use error::{PredictError, Result};
pub use features::{parse_features, FeatureDef, FEATURES, FEATURE_COUNT};
pub use model::{Link, RockfallModel, DEFAULT_MODEL};
pub use ranking::{factor_ranking, top_factors, Factor, RANKING_SEED, TOP_FACTORS};
pub use results::{Assessment, RiskLevel};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // Version should be semver format like "0.1.0"
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "rockfall-inference");
    }
}
