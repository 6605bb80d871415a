// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

//! Contributing-factor ranking for the report line.
//!
//! The ranking is a fixed-seed pseudo-random distribution over the feature
//! names, regenerated identically on every run. It is display-only and is
//! NOT derived from the trained model's weights. Kept as shipped in the
//! original product; see DESIGN.md.

use std::fmt;

use rand::prelude::*;

use crate::features::{FEATURES, FEATURE_COUNT};

/// Seed for the synthetic importance distribution. Fixed so the ranking is
/// identical across runs.
pub const RANKING_SEED: u64 = 42;

/// Number of factors shown in the report line.
pub const TOP_FACTORS: usize = 3;

/// A feature name paired with its synthetic importance weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    /// Feature name.
    pub name: &'static str,
    /// Display unit.
    pub unit: &'static str,
    /// Normalized weight in [0, 1]; all weights sum to 1.
    pub weight: f64,
}

impl Factor {
    /// Weight as a percentage.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.weight * 100.0
    }
}

impl fmt::Display for Factor {
    /// Formats as `Name (unit) (xx.x%)`, the shape downstream consumers
    /// parse out of the report line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) ({:.1}%)", self.name, self.unit, self.percentage())
    }
}

/// Synthetic importance distribution over all features.
///
/// One uniform draw per feature from a seeded RNG, normalized to sum to 1.
/// Returned in feature order, unsorted.
#[must_use]
pub fn factor_ranking() -> Vec<Factor> {
    let mut rng = StdRng::seed_from_u64(RANKING_SEED);
    let raw: Vec<f64> = (0..FEATURE_COUNT).map(|_| rng.gen::<f64>()).collect();
    let total: f64 = raw.iter().sum();

    FEATURES
        .iter()
        .zip(raw)
        .map(|(def, w)| Factor {
            name: def.name,
            unit: def.unit,
            weight: w / total,
        })
        .collect()
}

/// The `k` highest-weighted factors in strictly descending weight order.
#[must_use]
pub fn top_factors(k: usize) -> Vec<Factor> {
    let mut ranking = factor_ranking();
    ranking.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    ranking.truncate(k);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_is_normalized() {
        let ranking = factor_ranking();
        assert_eq!(ranking.len(), FEATURE_COUNT);

        let total: f64 = ranking.iter().map(|f| f.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(ranking.iter().all(|f| f.weight >= 0.0));
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let a = factor_ranking();
        let b = factor_ranking();
        assert_eq!(a, b);
    }

    #[test]
    fn test_top_factors_descending_and_distinct() {
        let top = top_factors(TOP_FACTORS);
        assert_eq!(top.len(), TOP_FACTORS);

        for pair in top.windows(2) {
            assert!(pair[0].weight > pair[1].weight);
        }

        assert_ne!(top[0].name, top[1].name);
        assert_ne!(top[1].name, top[2].name);
        assert_ne!(top[0].name, top[2].name);

        // Every factor names a real feature.
        for factor in &top {
            assert!(FEATURES.iter().any(|def| def.name == factor.name));
        }
    }

    #[test]
    fn test_factor_display() {
        let factor = Factor {
            name: "Rainfall",
            unit: "mm/day",
            weight: 0.123,
        };
        assert_eq!(factor.to_string(), "Rainfall (mm/day) (12.3%)");
    }
}
