// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

//! Assessment types for prediction output.
//!
//! This module turns a raw model score into the clamped probability,
//! risk level, and formatted report line the CLI prints.

use std::fmt;

use crate::ranking::{top_factors, Factor, TOP_FACTORS};

/// Risk bands derived from the rockfall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Below 30%.
    Low,
    /// 30% to below 60%.
    Moderate,
    /// 60% to below 85%.
    High,
    /// 85% and above.
    Critical,
}

impl RiskLevel {
    /// Band for a percentage in [0, 100].
    #[must_use]
    pub fn from_percentage(pct: f64) -> Self {
        if pct < 30.0 {
            Self::Low
        } else if pct < 60.0 {
            Self::Moderate
        } else if pct < 85.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    /// Returns the string representation used in summaries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A completed risk assessment for one feature row.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Model output clamped into [0, 1].
    probability: f64,
    /// Top contributing factors, descending weight.
    factors: Vec<Factor>,
}

impl Assessment {
    /// Build an assessment from a raw model score.
    ///
    /// The score is clamped into [0, 1]; the underlying model is not
    /// guaranteed to emit a probability.
    #[must_use]
    pub fn new(raw_score: f64) -> Self {
        Self {
            probability: raw_score.clamp(0.0, 1.0),
            factors: top_factors(TOP_FACTORS),
        }
    }

    /// Clamped probability in [0, 1].
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Probability as a percentage in [0, 100].
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }

    /// Risk band for this assessment.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_percentage(self.percentage())
    }

    /// Top contributing factors, descending weight.
    #[must_use]
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// The single-line report printed on stdout.
    #[must_use]
    pub fn report_line(&self) -> String {
        let factors = self
            .factors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "The chance of rockfall is {:.4}%. Top contributing factors: {factors}.",
            self.percentage()
        )
    }
}
